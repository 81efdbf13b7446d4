use crate::{Error, Result};

/// Largest `x * y` area a pattern header may declare.
pub const MAX_PATTERN_AREA: usize = 1 << 24;

/// Returns `(row, col)` of every alive cell of the parsed RLE pattern.
///
/// Headers declaring more than [`MAX_PATTERN_AREA`] cells are rejected.
pub fn parse_rle(data: &[u8]) -> Result<Vec<(usize, usize)>> {
    let err = |pos, reason| Error::Rle { pos, reason };

    let parse_next_number = |i: &mut usize| -> Result<usize> {
        while *i < data.len() && !data[*i].is_ascii_digit() {
            if data[*i] == b'\n' {
                return Err(err(*i, "expected a number"));
            }
            *i += 1;
        }
        let start = *i;
        let mut ans = 0usize;
        while *i < data.len() && data[*i].is_ascii_digit() {
            ans = ans
                .checked_mul(10)
                .and_then(|x| x.checked_add((data[*i] - b'0') as usize))
                .ok_or(err(start, "number is too large"))?;
            *i += 1;
        }
        if start == *i {
            return Err(err(start, "expected a number"));
        }
        Ok(ans)
    };

    let mut i = 0;
    // skipping comment and blank lines
    while i < data.len() && (data[i] == b'#' || data[i].is_ascii_whitespace()) {
        if data[i] == b'#' {
            while i < data.len() && data[i] != b'\n' {
                i += 1;
            }
        }
        i += 1;
    }
    // next line must start with 'x'; parsing sizes
    if data.get(i) != Some(&b'x') {
        return Err(err(i, "missing `x = .., y = ..` header"));
    }
    let width = parse_next_number(&mut i)?;
    let height = parse_next_number(&mut i)?;
    if width
        .checked_mul(height)
        .map_or(true, |area| area > MAX_PATTERN_AREA)
    {
        return Err(err(i, "declared size is too large"));
    }
    while i < data.len() && data[i] != b'\n' {
        i += 1;
    }

    // run-length encoded pattern data
    let mut result = vec![];
    let (mut col, mut row, mut cnt) = (0usize, 0usize, None);
    while i < data.len() {
        match data[i] {
            b'0'..=b'9' => {
                cnt = Some(parse_next_number(&mut i)?);
                continue;
            }
            b'o' => {
                let n = cnt.take().unwrap_or(1);
                if col.saturating_add(n) > width || row >= height {
                    return Err(err(i, "cell outside of the declared size"));
                }
                result.extend((col..col + n).map(|c| (row, c)));
                col += n;
            }
            b'b' => {
                col = col.saturating_add(cnt.take().unwrap_or(1));
                if col > width {
                    return Err(err(i, "row is longer than the declared width"));
                }
            }
            b'$' => {
                row = row.saturating_add(cnt.take().unwrap_or(1));
                col = 0;
            }
            b'!' => return Ok(result),
            c if c.is_ascii_whitespace() => {}
            _ => return Err(err(i, "unexpected symbol")),
        }
        i += 1;
    }
    Err(err(i, "missing terminating `!`"))
}
