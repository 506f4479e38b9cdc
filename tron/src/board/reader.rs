use std::io::BufRead;

use crate::{Board, Cell, Coord, ParseError, Player, ReadBoardError};

const MAX_EXCERPT_LEN: usize = 80;

/// Reads one turn's board. See [`Board::read()`].
pub(crate) fn read_board<R: BufRead + ?Sized>(
    reader: &mut R,
) -> Result<Option<Board>, ReadBoardError> {
    let mut line = Vec::new();
    if reader.read_until(b'\n', &mut line)? == 0 {
        // Nothing at all before the header means the referee is done with us.
        return Ok(None);
    }
    let (width, height) = parse_header(&line)?;

    let mut cells = Vec::new();
    let mut positions: [Option<Coord>; 2] = [None, None];
    for y in 0..height {
        line.clear();
        reader.read_until(b'\n', &mut line)?;
        if line.pop() != Some(b'\n') {
            return Err(ParseError::RowCountMismatch {
                expected: height,
                found: y,
            }
            .into());
        }
        line.retain(|&byte| byte != b'\r');
        // Rows are measured in characters. Bytes that aren't UTF-8 turn into
        // U+FFFD, which is rejected below like any other stray character.
        let row = String::from_utf8_lossy(&line);
        let found = row.chars().count();
        if found != width as usize {
            return Err(ParseError::RowLengthMismatch {
                row: y,
                expected: width,
                found,
                line: excerpt(&line),
            }
            .into());
        }

        for (x, character) in row.chars().enumerate() {
            let at = Coord::new(x as i32, y);
            let cell =
                Cell::from_char(character).ok_or(ParseError::InvalidCharacter { character, at })?;
            if let Some(player) = cell.player() {
                let position = &mut positions[player as usize];
                if let Some(first) = *position {
                    return Err(ParseError::DuplicatePlayer {
                        player,
                        first,
                        second: at,
                    }
                    .into());
                }
                *position = Some(at);
            }
            cells.push(cell);
        }
    }

    let [me, them] = positions;
    Ok(Some(Board {
        width,
        height,
        cells,
        me: me.ok_or(ParseError::MissingPlayer { player: Player::One })?,
        them: them.ok_or(ParseError::MissingPlayer { player: Player::Two })?,
    }))
}

fn parse_header(line: &[u8]) -> Result<(i32, i32), ParseError> {
    let malformed = || ParseError::MalformedHeader {
        line: excerpt(line),
    };
    let text = std::str::from_utf8(line).map_err(|_| malformed())?;
    let mut tokens = text.split_whitespace();
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(width), Some(height), None) => Ok((
            parse_dimension(width).ok_or_else(malformed)?,
            parse_dimension(height).ok_or_else(malformed)?,
        )),
        _ => Err(malformed()),
    }
}

fn parse_dimension(token: &str) -> Option<i32> {
    token.parse::<i32>().ok().filter(|&n| n > 0)
}

fn excerpt(bytes: &[u8]) -> String {
    let text = String::from_utf8_lossy(bytes);
    let text = text.trim_end_matches(['\r', '\n']);
    match text.char_indices().nth(MAX_EXCERPT_LEN) {
        Some((end, _)) => format!("{}...", &text[..end]),
        None => String::from(text),
    }
}
