pub const NUM_DIGITS: u8 = 4;
pub const CLOCK_PULSE_US: u32 = 2; // 74HC595 minimum SH_CP high time, with margin
pub const SEGMENTS_OFF: u8 = 0xFF; // active low
pub const DOT_MASK: u8 = 0x7F; // clear bit 7 to light DP

// digit select, high nibble (p3 p2 p1 p0 xxxx), active high
pub const POSITIONS: [u8; NUM_DIGITS as usize] = [0b0001_0000, 0b0010_0000, 0b0100_0000, 0b1000_0000];

// segment patterns are DP g f e d c b a, active low
pub const NUMBERS: [u8; 16] = [
    0xC0, 0xF9, 0xA4, 0xB0, 0x99, 0x92, 0x82, 0xF8, 0x80, 0x90, 0x88, 0x83, 0xC6, 0xA1, 0x86, 0x8E,
];
pub const LETTERS: [u8; 26] = [
    0x88, 0x83, 0xC6, 0xA1, 0x86, 0x8E, 0xC2, 0x89, 0xF9, 0xE1, 0x85, 0xC7, 0xEA, 0xAB, 0xA3, 0x8C,
    0x98, 0xAF, 0x92, 0x87, 0xC1, 0xE3, 0xD5, 0xB6, 0x91, 0xAD,
];
pub const MINUS: u8 = 0xBF; // g only
pub const BLANK: u8 = SEGMENTS_OFF;

pub const DHT12_ADDRESS: u8 = 0x5C;
pub const SAMPLE_EVERY_TICKS: u8 = 5; // timer overflows (~1 s each) per sensor read

#[allow(dead_code)]
pub mod dht12 {
    pub const HUMIDITY_INT: u8 = 0x00;
    pub const HUMIDITY_DEC: u8 = 0x01;
    pub const TEMPERATURE_INT: u8 = 0x02;
    pub const TEMPERATURE_DEC: u8 = 0x03;
    pub const CHECKSUM: u8 = 0x04;
    pub const READING_LEN: usize = 5;
}
