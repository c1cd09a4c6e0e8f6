//! Binary persistence: the `.mze` save-game codec.
//!
//! ## Wire format
//!
//! All integers are big-endian two's-complement, floats IEEE-754 binary32:
//!
//! ```text
//! offset  size  field
//! 0       2     magic = 0xCA 0xFE
//! 2       2     mode tag: 0xBE 0xEF = new game | 0xDE 0xED = played game
//! 4       4     tileCount N (i32)
//! 8       8     elapsedTime (i64, 0.1 s ticks)
//! 16..    repeated N times:
//!           4   tileId (i32)
//!           4   rotation (i32; meaningful only if mode = played)
//!           4   lineCount L (i32)
//!           L*16  L groups of 4 f32 (x1, y1, x2, y2)
//! ```
//!
//! File coordinates are normalized to a 100-pixel reference tile; decoding
//! rescales them by `tile_size / 100` and encoding re-normalizes, so the
//! geometry round-trips at any tile size. The encoder always persists the
//! **un-rotated** home geometry — rotation state travels solely in the
//! rotation field, which is what lets the decoder apply it at load time.
//!
//! File order is authoritative: the order tiles appear in the file is the
//! solved order.
//!
//! ## Errors
//!
//! Anything structurally wrong with the buffer — short header, bad magic,
//! unknown tag, truncated body, negative counts — is a
//! [`MazeError::CorruptFormat`] and always surfaces to the caller; the
//! engine never silently recovers a corrupt file. I/O failures propagate
//! untouched and are never retried; the UI layer owns re-prompting.

use std::path::Path;

use rustc_hash::FxHashMap;
use thiserror::Error;

use crate::core::config::REFERENCE_TILE_SIZE;
use crate::core::geometry::{LineSegment, SegmentList};
use crate::session::GameSession;

/// File magic, the first two bytes of every maze file.
pub const MAGIC: [u8; 2] = [0xCA, 0xFE];

/// Mode tag for a new (unplayed) game.
pub const TAG_NEW: [u8; 2] = [0xBE, 0xEF];

/// Mode tag for a played game.
pub const TAG_PLAYED: [u8; 2] = [0xDE, 0xED];

/// Errors surfaced by the codec.
#[derive(Debug, Error)]
pub enum MazeError {
    /// The buffer is not a well-formed maze file. Never recovered.
    #[error("corrupt maze file: {reason}")]
    CorruptFormat {
        /// What was wrong with the buffer.
        reason: &'static str,
    },

    /// Reading or writing the file failed. Propagated, not retried.
    #[error("maze file i/o failed: {0}")]
    Io(#[from] std::io::Error),
}

/// One tile as decoded from a file, before a live [`Tile`](crate::core::Tile)
/// is built from it.
#[derive(Clone, Debug, PartialEq)]
pub struct TileRecord {
    /// Stored rotation count (0 for a new game).
    pub rotations: u32,
    /// Line segments, already rescaled to the board's tile size.
    pub segments: SegmentList,
}

/// A fully decoded maze file.
#[derive(Clone, Debug, Default)]
pub struct MazeData {
    /// Mode tag: was this saved mid-game?
    pub played: bool,
    /// Elapsed time in 0.1 s ticks.
    pub elapsed_ticks: i64,
    /// Tile ids in file order — the authoritative solved order.
    pub order: Vec<u32>,
    /// Records keyed by tile id. Ids are not necessarily sequential.
    pub records: FxHashMap<u32, TileRecord>,
}

impl MazeData {
    /// Number of tiles in the file.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.order.len()
    }
}

/// Big-endian cursor over a byte buffer.
struct Reader<'a> {
    buf: &'a [u8],
}

impl<'a> Reader<'a> {
    fn new(buf: &'a [u8]) -> Self {
        Self { buf }
    }

    fn remaining(&self) -> usize {
        self.buf.len()
    }

    fn take<const N: usize>(&mut self) -> Result<[u8; N], MazeError> {
        if self.buf.len() < N {
            return Err(MazeError::CorruptFormat {
                reason: "truncated buffer",
            });
        }
        let (head, rest) = self.buf.split_at(N);
        self.buf = rest;
        let mut bytes = [0u8; N];
        bytes.copy_from_slice(head);
        Ok(bytes)
    }

    fn read_i32(&mut self) -> Result<i32, MazeError> {
        Ok(i32::from_be_bytes(self.take::<4>()?))
    }

    fn read_i64(&mut self) -> Result<i64, MazeError> {
        Ok(i64::from_be_bytes(self.take::<8>()?))
    }

    fn read_f32(&mut self) -> Result<f32, MazeError> {
        Ok(f32::from_be_bytes(self.take::<4>()?))
    }
}

/// Decode a maze file buffer.
///
/// `tile_size` is the board's tile edge in pixels; every coordinate is
/// rescaled by `tile_size / 100` as it is read. Fails with
/// [`MazeError::CorruptFormat`] on a short header, wrong magic, unknown
/// mode tag, or a body shorter than its declared contents.
pub fn decode(bytes: &[u8], tile_size: f32) -> Result<MazeData, MazeError> {
    if bytes.len() < 4 {
        return Err(MazeError::CorruptFormat {
            reason: "missing header",
        });
    }
    if bytes[0..2] != MAGIC {
        return Err(MazeError::CorruptFormat {
            reason: "bad magic",
        });
    }
    let played = match [bytes[2], bytes[3]] {
        tag if tag == TAG_NEW => false,
        tag if tag == TAG_PLAYED => true,
        _ => {
            return Err(MazeError::CorruptFormat {
                reason: "unknown mode tag",
            })
        }
    };

    let mut reader = Reader::new(&bytes[4..]);
    let tile_count = reader.read_i32()?;
    if tile_count < 0 {
        return Err(MazeError::CorruptFormat {
            reason: "negative tile count",
        });
    }
    let elapsed_ticks = reader.read_i64()?;

    let scale = tile_size / REFERENCE_TILE_SIZE;
    // The declared count is untrusted until the body has been read: cap
    // the allocation hint by what the buffer could hold (a tile record is
    // at least 12 bytes) and let the truncation checks reject the rest.
    let plausible = (tile_count as usize).min(reader.remaining() / 12);
    let mut order = Vec::with_capacity(plausible);
    let mut records = FxHashMap::default();

    for _ in 0..tile_count {
        let id = reader.read_i32()?;
        if id < 0 {
            return Err(MazeError::CorruptFormat {
                reason: "negative tile id",
            });
        }

        let stored_rotation = reader.read_i32()?;
        // The rotation field is only meaningful for a played game.
        let rotations = if played {
            stored_rotation.rem_euclid(4) as u32
        } else {
            0
        };

        let line_count = reader.read_i32()?;
        if line_count < 0 {
            return Err(MazeError::CorruptFormat {
                reason: "negative line count",
            });
        }

        let mut segments = SegmentList::new();
        for _ in 0..line_count {
            let x1 = reader.read_f32()?;
            let y1 = reader.read_f32()?;
            let x2 = reader.read_f32()?;
            let y2 = reader.read_f32()?;
            segments.push(LineSegment::new(x1, y1, x2, y2).scaled(scale));
        }

        let id = id as u32;
        if records.insert(id, TileRecord { rotations, segments }).is_some() {
            return Err(MazeError::CorruptFormat {
                reason: "duplicate tile id",
            });
        }
        order.push(id);
    }

    Ok(MazeData {
        played,
        elapsed_ticks,
        order,
        records,
    })
}

/// Encode a session as a maze file buffer — the mirror of [`decode`].
///
/// Tiles are written in solved order, and the header count is the
/// session's live tile count so the header always matches the body. Each
/// tile's stored id is its current cell id, the rotation field is
/// `rotations % 4` (0 when the game is unplayed), and the geometry is the
/// un-rotated home geometry re-normalized to the 100-pixel reference tile.
#[must_use]
pub fn encode(session: &GameSession) -> Vec<u8> {
    let played = session.is_played();
    let config = session.config();
    let normalize = REFERENCE_TILE_SIZE / config.tile_size_f32();

    let mut out = Vec::new();
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(if played { &TAG_PLAYED } else { &TAG_NEW });
    out.extend_from_slice(&(session.tile_count() as i32).to_be_bytes());
    out.extend_from_slice(&session.clock().ticks().to_be_bytes());

    for tile in session.ordered_tiles() {
        out.extend_from_slice(&(tile.current_cell().raw() as i32).to_be_bytes());

        let rotation = if played { tile.orientation() as i32 } else { 0 };
        out.extend_from_slice(&rotation.to_be_bytes());

        let segments = tile.original_segments();
        out.extend_from_slice(&(segments.len() as i32).to_be_bytes());
        for segment in segments {
            for coord in segment.scaled(normalize).coords() {
                out.extend_from_slice(&coord.to_be_bytes());
            }
        }
    }

    out
}

/// Read and decode a maze file from disk.
pub fn read_maze(path: impl AsRef<Path>, tile_size: f32) -> Result<MazeData, MazeError> {
    let bytes = std::fs::read(path)?;
    decode(&bytes, tile_size)
}

/// Encode a session and write it to disk.
pub fn write_maze(path: impl AsRef<Path>, session: &GameSession) -> Result<(), MazeError> {
    std::fs::write(path, encode(session))?;
    Ok(())
}
