//! Inflection rule decoding.
//!
//! Inflected forms are stored as tiny edit scripts relative to the headword.
//! Each byte of a script is one opcode:
//!
//! ```text
//! 0x00         end of script
//! 0x01..=0x04  switch mode and direction
//!                1: insert, right   2: insert, left
//!                3: delete, left    4: delete, right
//! 0x0B..=0x13  move the cursor left by (byte - 10)
//! otherwise    literal byte to insert, or to match and delete
//! ```
//!
//! "Left" edits work from the end of the word backwards (suffixes), "right"
//! edits work from the start forwards (prefixes). Scripts come from untrusted
//! input, so every buffer shift is bounds checked and any inconsistency is
//! reported as [`MobiDictError::CorruptRule`].

use log::trace;

use crate::mobi::config::RULE_BUFFER_CAPACITY;
use crate::mobi::types::error::{MobiDictError, Result};

const OPCODE_END: u8 = 0x00;
const SEEK_BASE: u8 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Insert,
    Delete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    /// Set by a seek; cleared by the next mode switch.
    None,
}

/// A fixed-capacity byte buffer holding the word being edited.
#[derive(Debug, Clone)]
pub struct RuleBuffer {
    bytes: [u8; RULE_BUFFER_CAPACITY],
    len: usize,
}

impl Default for RuleBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleBuffer {
    pub fn new() -> Self {
        Self {
            bytes: [0; RULE_BUFFER_CAPACITY],
            len: 0,
        }
    }

    /// Creates a buffer whose content starts as `seed`.
    pub fn seeded(seed: &[u8]) -> Result<Self> {
        if seed.len() > RULE_BUFFER_CAPACITY {
            return Err(MobiDictError::CorruptRule(format!(
                "seed of {} bytes exceeds rule buffer capacity {}",
                seed.len(),
                RULE_BUFFER_CAPACITY
            )));
        }
        let mut buffer = Self::new();
        buffer.bytes[..seed.len()].copy_from_slice(seed);
        buffer.len = seed.len();
        Ok(buffer)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Inserts `byte` at `cursor`, shifting the tail one position right.
    fn insert_at(&mut self, cursor: isize, byte: u8) -> Result<()> {
        let pos = self.checked_shift(cursor)?;
        self.bytes.copy_within(pos..self.len, pos + 1);
        self.bytes[pos] = byte;
        self.len += 1;
        Ok(())
    }

    /// Removes the byte at `cursor` after checking it equals `expected`.
    fn remove_at(&mut self, cursor: isize, expected: u8) -> Result<()> {
        let pos = self.checked_shift(cursor)?;
        match self.as_bytes().get(pos) {
            Some(&found) if found == expected => {}
            Some(&found) => {
                return Err(MobiDictError::CorruptRule(format!(
                    "delete expected {:#04x} at position {} but found {:#04x}",
                    expected, pos, found
                )));
            }
            None => {
                return Err(MobiDictError::CorruptRule(format!(
                    "delete of {:#04x} at position {} is past the end of a {} byte word",
                    expected, pos, self.len
                )));
            }
        }
        self.bytes.copy_within(pos + 1..self.len, pos);
        self.len -= 1;
        Ok(())
    }

    /// Bounds check shared by inserts and deletes.
    ///
    /// The cursor must be non-negative, must not lie past the logical end, and
    /// the tail `[cursor, len)` moved by one byte must stay inside the buffer.
    fn checked_shift(&self, cursor: isize) -> Result<usize> {
        if cursor < 0 {
            return Err(MobiDictError::CorruptRule(format!(
                "cursor {} is before the start of the buffer",
                cursor
            )));
        }
        let pos = cursor as usize;
        if pos > self.len {
            return Err(MobiDictError::CorruptRule(format!(
                "cursor {} is past the end of a {} byte word",
                cursor, self.len
            )));
        }
        let remaining = self.len - pos;
        if pos + 1 + remaining > RULE_BUFFER_CAPACITY {
            return Err(MobiDictError::CorruptRule(format!(
                "shift at position {} overflows rule buffer capacity {}",
                pos, RULE_BUFFER_CAPACITY
            )));
        }
        Ok(pos)
    }
}

/// Interpreter state for one script run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleDecoder {
    cursor: isize,
    mode: Mode,
    direction: Direction,
}

impl RuleDecoder {
    /// Starts at the end of the buffer in left-insert mode.
    pub fn new(buffer: &RuleBuffer) -> Self {
        Self {
            cursor: buffer.len() as isize,
            mode: Mode::Insert,
            direction: Direction::Left,
        }
    }

    pub fn cursor(&self) -> isize {
        self.cursor
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Applies a single non-terminating opcode to `buffer`.
    pub fn step(&mut self, buffer: &mut RuleBuffer, byte: u8) -> Result<()> {
        match byte {
            0x01..=0x04 => {
                self.switch(byte, buffer.len());
                Ok(())
            }
            0x0B..=0x13 => {
                self.seek(byte, buffer.len());
                Ok(())
            }
            literal => self.apply_literal(buffer, literal),
        }
    }

    fn switch(&mut self, opcode: u8, len: usize) {
        self.mode = if opcode <= 2 { Mode::Insert } else { Mode::Delete };
        let direction = if opcode & 2 != 0 {
            Direction::Left
        } else {
            Direction::Right
        };
        // Reversing a previously set direction restarts from that end.
        if self.direction != Direction::None && self.direction != direction {
            self.cursor = match direction {
                Direction::Left => len as isize,
                _ => 0,
            };
        }
        self.direction = direction;
    }

    fn seek(&mut self, opcode: u8, len: usize) {
        if self.direction == Direction::Right {
            self.cursor = len as isize;
        }
        self.cursor -= (opcode - SEEK_BASE) as isize;
        self.direction = Direction::None;
    }

    fn apply_literal(&mut self, buffer: &mut RuleBuffer, literal: u8) -> Result<()> {
        match self.mode {
            Mode::Insert => {
                buffer.insert_at(self.cursor, literal)?;
                if self.direction == Direction::Right {
                    self.cursor += 1;
                }
            }
            Mode::Delete => {
                if self.direction == Direction::Left {
                    self.cursor -= 1;
                }
                buffer.remove_at(self.cursor, literal)?;
            }
        }
        Ok(())
    }
}

/// Runs `rule` against `buffer`, stopping at the first zero byte.
///
/// On error the buffer content is unspecified and must be discarded.
pub fn decode_rule(buffer: &mut RuleBuffer, rule: &[u8]) -> Result<()> {
    let mut decoder = RuleDecoder::new(buffer);
    for (position, &byte) in rule.iter().enumerate() {
        if byte == OPCODE_END {
            break;
        }
        if let Err(e) = decoder.step(buffer, byte) {
            trace!("Inflection rule failed at byte {} ({:#04x}): {}", position, byte, e);
            return Err(e);
        }
    }
    Ok(())
}

/// Decodes `rule` against an empty buffer.
pub fn decode(rule: &[u8]) -> Result<Vec<u8>> {
    let mut buffer = RuleBuffer::new();
    decode_rule(&mut buffer, rule)?;
    Ok(buffer.as_bytes().to_vec())
}

/// Decodes `rule` against a buffer seeded with `seed` (normally the headword)
/// and returns the complete edited word.
pub fn apply_rule(seed: &[u8], rule: &[u8]) -> Result<Vec<u8>> {
    let mut buffer = RuleBuffer::seeded(seed)?;
    decode_rule(&mut buffer, rule)?;
    trace!(
        "Applied inflection rule {:02x?}: {:?} -> {:?}",
        rule,
        String::from_utf8_lossy(seed),
        String::from_utf8_lossy(buffer.as_bytes())
    );
    Ok(buffer.as_bytes().to_vec())
}
