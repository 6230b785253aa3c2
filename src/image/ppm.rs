//! Plain-text pixel-map (P3 style) codec.
//!
//! Layout: a format tag, `<width> <height>`, a maximum channel value, then
//! `width * height` row-major `(r, g, b)` triples. Tokens may be separated by
//! any whitespace and `#` starts a comment that runs to the end of the line.
//! The tag and the maximum value are read but not interpreted; channels are
//! always treated as 8-bit.
use super::{Color, PixelGrid};
use crate::error::{Error, Result};
use log::{debug, warn};
use std::fmt::Write as _;
use std::io::Read;

/// Tag written by [`encode`].
pub const FORMAT_TAG: &str = "P3";
/// Maximum channel value written by [`encode`].
pub const MAX_VALUE: u8 = 255;

/// Decode a pixel map held in memory.
pub fn decode(source: &str) -> Result<PixelGrid> {
    let mut tokens = Tokens::new(source);

    let tag = tokens
        .next()
        .ok_or_else(|| Error::Format("missing format tag".into()))?;
    if tag != FORMAT_TAG {
        debug!("pixel map tag {tag:?} is not {FORMAT_TAG}, decoding anyway");
    }
    let width = header_int(&mut tokens, "width")?;
    let height = header_int(&mut tokens, "height")?;
    let max_value = header_int(&mut tokens, "maximum value")?;
    if max_value != usize::from(MAX_VALUE) {
        debug!("pixel map declares max value {max_value}, channels still read as 8-bit");
    }
    super::grid::check_dims(width, height)?;

    let expected = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(3))
        .ok_or_else(|| Error::Format(format!("{width}x{height} pixel map is too large")))?;
    // A bogus header must not drive the allocation.
    let mut channels = Vec::with_capacity(expected.min(source.len()));
    let mut clamped = 0usize;
    for token in tokens.take(expected) {
        let v: i64 = token
            .parse()
            .map_err(|_| Error::Format(format!("channel value {token:?} is not an integer")))?;
        if !(0..=255).contains(&v) {
            clamped += 1;
        }
        channels.push(v.clamp(0, 255) as u8);
    }
    if channels.len() < expected {
        return Err(Error::TruncatedInput {
            expected,
            found: channels.len(),
        });
    }
    if clamped > 0 {
        warn!("clamped {clamped} channel value(s) outside [0, 255]");
    }

    let pixels = channels
        .chunks_exact(3)
        .map(|c| Color::new(c[0], c[1], c[2]))
        .collect();
    debug!("decoded {width}x{height} pixel map");
    PixelGrid::from_pixels(width, height, pixels)
}

/// Decode a pixel map from raw bytes; non-UTF-8 content is a format error.
pub fn decode_bytes(bytes: &[u8]) -> Result<PixelGrid> {
    let source = std::str::from_utf8(bytes).map_err(|e| {
        Error::Format(format!("pixel map is not valid UTF-8 text: {e}"))
    })?;
    decode(source)
}

/// Decode a pixel map from any reader.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<PixelGrid> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| Error::io("<reader>", e))?;
    decode_bytes(&bytes)
}

/// Encode `grid` with one image row per line.
pub fn encode(grid: &PixelGrid) -> String {
    use super::ImageView;

    let mut out = String::with_capacity(16 + grid.width() * grid.height() * 12);
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{FORMAT_TAG}");
    let _ = writeln!(out, "{} {}", grid.width(), grid.height());
    let _ = writeln!(out, "{MAX_VALUE}");
    for row in grid.rows() {
        let line = row
            .iter()
            .map(|c| format!("{} {} {}", c.red(), c.green(), c.blue()))
            .collect::<Vec<_>>()
            .join("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn header_int(tokens: &mut Tokens<'_>, what: &str) -> Result<usize> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::Format(format!("header ends before {what}")))?;
    token
        .parse()
        .map_err(|_| Error::Format(format!("{what} {token:?} is not a non-negative integer")))
}

/// Whitespace tokenizer that drops `#` comments.
struct Tokens<'a> {
    lines: std::str::Lines<'a>,
    current: std::str::SplitWhitespace<'a>,
}

impl<'a> Tokens<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            lines: source.lines(),
            current: "".split_whitespace(),
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        loop {
            if let Some(tok) = self.current.next() {
                return Some(tok);
            }
            let line = self.lines.next()?;
            let body = line.split_once('#').map_or(line, |(before, _)| before);
            self.current = body.split_whitespace();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_BY_TWO: &str = "P3\n2 2\n255\n255 0 0  0 255 0  0 0 255  255 255 255\n";

    #[test]
    fn decodes_row_major_triples() {
        let grid = decode(TWO_BY_TWO).unwrap();
        assert_eq!(grid.dims(), (2, 2));
        assert_eq!(
            grid.to_rows(),
            vec![
                vec![Color::new(255, 0, 0), Color::new(0, 255, 0)],
                vec![Color::new(0, 0, 255), Color::new(255, 255, 255)],
            ]
        );
    }

    #[test]
    fn header_order_is_width_then_height() {
        let grid = decode("P3 3 1 255  1 1 1  2 2 2  3 3 3").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 1));
        assert_eq!(grid.get(2, 0), Color::gray(3));
    }

    #[test]
    fn comments_are_skipped() {
        let src = "P3\n# made by hand\n1 1 # w h\n255\n10 20 30\n";
        assert_eq!(decode(src).unwrap().get(0, 0), Color::new(10, 20, 30));
    }

    #[test]
    fn bad_header_is_a_format_error() {
        assert!(matches!(decode(""), Err(Error::Format(_))));
        assert!(matches!(decode("P3\ntwo 2\n255\n"), Err(Error::Format(_))));
        assert!(matches!(decode("P3\n2 2\n"), Err(Error::Format(_))));
        assert!(matches!(decode("P3\n-1 2\n255\n"), Err(Error::Format(_))));
    }

    #[test]
    fn short_body_is_truncated() {
        let err = decode("P3\n2 1\n255\n1 2 3 4 5\n").unwrap_err();
        assert!(matches!(
            err,
            Error::TruncatedInput {
                expected: 6,
                found: 5
            }
        ));
    }

    #[test]
    fn zero_sized_header_is_rejected() {
        assert!(matches!(
            decode("P3\n0 3\n255\n"),
            Err(Error::InvalidDimension { width: 0, height: 3 })
        ));
    }

    #[test]
    fn out_of_range_channels_are_clamped() {
        let grid = decode("P3\n1 1\n255\n300 -2 7\n").unwrap();
        assert_eq!(grid.get(0, 0), Color::new(255, 0, 7));
    }

    #[test]
    fn reader_input_matches_str_input() {
        let grid = decode_reader(TWO_BY_TWO.as_bytes()).unwrap();
        assert_eq!(grid, decode(TWO_BY_TWO).unwrap());
    }

    #[test]
    fn non_utf8_body_is_a_format_error() {
        let err = decode_reader(&b"P3\n1 1\n255\n1 2 \xff"[..]).unwrap_err();
        assert!(matches!(err, Error::Format(_)), "got {err:?}");
        assert!(matches!(decode_bytes(b"P3\xff"), Err(Error::Format(_))));
    }

    #[test]
    fn encode_then_decode_preserves_channels() {
        let grid = decode(TWO_BY_TWO).unwrap();
        let text = encode(&grid);
        assert!(text.starts_with("P3\n2 2\n255\n"));
        assert_eq!(decode(&text).unwrap(), grid);
    }
}
