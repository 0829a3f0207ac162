use crate::constants::*;
use crate::Ssd595Error;
use num_traits::ToPrimitive;

/// Segment patterns for the four positions, index 0 leftmost.
///
/// The display holds one frame at a time, so a `Digits` value is what the
/// caller keeps around and walks through with [`crate::SSD595::show`] on
/// every refresh.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Digits([u8; NUM_DIGITS as usize]);

impl Default for Digits {
    fn default() -> Self {
        Self::blank()
    }
}

impl Digits {
    pub const fn blank() -> Self {
        Digits([BLANK; NUM_DIGITS as usize])
    }

    /// Raw active-low patterns, used as given.
    pub const fn from_segments(segments: [u8; NUM_DIGITS as usize]) -> Self {
        Digits(segments)
    }

    /// Right-aligned decimal, -999 to 9999.
    pub fn from_decimal<T: ToPrimitive>(value: T) -> Result<Self, Ssd595Error> {
        let value = value.to_i32().ok_or(Ssd595Error::InvalidValue)?;
        Self::from_radix(value, 10)
    }

    /// Right-aligned hexadecimal, -0xFFF to 0xFFFF.
    pub fn from_hex<T: ToPrimitive>(value: T) -> Result<Self, Ssd595Error> {
        let value = value.to_i32().ok_or(Ssd595Error::InvalidValue)?;
        Self::from_radix(value, 16)
    }

    /// Digits, letters, space and `-`. A `.` lights the DP of the glyph
    /// before it; with no glyph before it, or one already dotted, it takes a
    /// blank position of its own. Text beyond the last position is dropped.
    pub fn from_ascii(bytes: &[u8]) -> Result<Self, Ssd595Error> {
        let mut digits = Self::blank();
        let mut index = 0;
        for &c in bytes {
            if c == b'.' && index > 0 && digits.0[index - 1] & !DOT_MASK != 0 {
                digits.0[index - 1] &= DOT_MASK;
                continue;
            }
            if index >= NUM_DIGITS as usize {
                break;
            }
            digits.0[index] = match c {
                b'.' => BLANK & DOT_MASK,
                _ => glyph(c).ok_or(Ssd595Error::InvalidValue)?,
            };
            index += 1;
        }
        Ok(digits)
    }

    pub fn with_dot(mut self, index: u8) -> Result<Self, Ssd595Error> {
        let segments = self
            .0
            .get_mut(index as usize)
            .ok_or(Ssd595Error::InvalidLocation(index))?;
        *segments &= DOT_MASK;
        Ok(self)
    }

    pub fn segments(&self, index: u8) -> Option<u8> {
        self.0.get(index as usize).copied()
    }

    pub fn as_array(&self) -> &[u8; NUM_DIGITS as usize] {
        &self.0
    }

    fn from_radix(value: i32, radix: u32) -> Result<Self, Ssd595Error> {
        let max = (radix as i32).pow(NUM_DIGITS as u32) - 1;
        let min = -((radix as i32).pow(NUM_DIGITS as u32 - 1) - 1);
        if value < min || value > max {
            return Err(Ssd595Error::InvalidValue);
        }

        let mut digits = Self::blank();
        let mut num = value.unsigned_abs();
        let mut index = NUM_DIGITS as usize;
        loop {
            index -= 1;
            digits.0[index] = NUMBERS[(num % radix) as usize];
            num /= radix;
            if num == 0 {
                break;
            }
        }
        if value < 0 {
            digits.0[index - 1] = MINUS;
        }
        Ok(digits)
    }
}

/// Active-low pattern for one ASCII character.
pub fn glyph(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(NUMBERS[(c - b'0') as usize]),
        b'a'..=b'z' => Some(LETTERS[(c - b'a') as usize]),
        b'A'..=b'Z' => Some(LETTERS[(c - b'A') as usize]),
        b'-' => Some(MINUS),
        b' ' => Some(BLANK),
        _ => None,
    }
}
