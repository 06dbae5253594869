/// ATX heading block type: one to six `#` characters, then whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: u8 = b'#';
    pub const MAX_LEVEL: usize = 6;

    /// Splits a trimmed line into heading level and text.
    pub fn parse(line: &str) -> Option<(u8, &str)> {
        let hashes = line.bytes().take_while(|&b| b == Self::MARKER).count();
        if hashes == 0 || hashes > Self::MAX_LEVEL {
            return None;
        }
        let text = super::after_required_whitespace(&line[hashes..])?;
        Some((hashes as u8, text))
    }
}
