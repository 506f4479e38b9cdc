use quickcheck::{Arbitrary, Gen};

use crate::{Coord, Direction};

const MAX_SIDE: usize = 12;

/// The text of a valid map, together with where the players were put.
#[derive(Clone, Debug)]
pub struct BoardMap {
    pub text: String,
    pub me: Coord,
    pub them: Coord,
}

impl Arbitrary for BoardMap {
    fn arbitrary(g: &mut Gen) -> Self {
        let mut width = 1 + usize::arbitrary(g) % MAX_SIDE;
        let height = 1 + usize::arbitrary(g) % MAX_SIDE;
        // Two players need two cells
        if width * height < 2 {
            width = 2;
        }

        let mut cells: Vec<u8> = (0..width * height)
            .map(|_| if bool::arbitrary(g) { b' ' } else { b'#' })
            .collect();
        let me_idx = usize::arbitrary(g) % cells.len();
        let them_idx = loop {
            let idx = usize::arbitrary(g) % cells.len();
            if idx != me_idx {
                break idx;
            }
        };
        cells[me_idx] = b'1';
        cells[them_idx] = b'2';

        let line_end = if bool::arbitrary(g) { "\n" } else { "\r\n" };
        let mut text = format!("{} {}{}", width, height, line_end);
        for row in cells.chunks(width) {
            text.push_str(std::str::from_utf8(row).unwrap());
            text.push_str(line_end);
        }

        let coord = |idx: usize| Coord::new((idx % width) as i32, (idx / width) as i32);
        BoardMap {
            text,
            me: coord(me_idx),
            them: coord(them_idx),
        }
    }
}

impl Arbitrary for Coord {
    fn arbitrary(g: &mut Gen) -> Self {
        // Half of them small, so that some land on the board
        if bool::arbitrary(g) {
            Coord::new(i32::arbitrary(g), i32::arbitrary(g))
        } else {
            Coord::new(
                i32::from(i8::arbitrary(g) % 16),
                i32::from(i8::arbitrary(g) % 16),
            )
        }
    }
}

impl Arbitrary for Direction {
    fn arbitrary(g: &mut Gen) -> Self {
        *g.choose(&Direction::ALL).unwrap()
    }
}
