mod cell;
mod reader;

use std::io::{BufRead, Cursor};
use std::str::FromStr;

pub use cell::*;

use crate::{Coord, Direction, ParseError, ReadBoardError};

/// One turn's snapshot of the arena.
///
/// A board is read fresh from the referee every turn and never changes afterwards.
/// Everything outside of the board counts as wall.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    /// Row-major, `width * height` cells.
    cells: Vec<Cell>,
    me: Coord,
    them: Coord,
}

impl Board {
    /// Reads the next board from the referee.
    ///
    /// The expected format is a header line with the width and height, followed by
    /// one line per row using `' '` for floor, `'#'` for walls, and `'1'`/`'2'` for the
    /// two players, e.g.
    ///
    /// ```text
    /// 6 4
    /// ######
    /// #1# 2#
    /// #   ##
    /// ######
    /// ```
    ///
    /// Returns `Ok(None)` if the input ended before the header, which is how the
    /// referee signals the end of the game. Running out of input anywhere later is
    /// an error.
    pub fn read<R: BufRead + ?Sized>(reader: &mut R) -> Result<Option<Board>, ReadBoardError> {
        reader::read_board(reader)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// The position of our own light cycle.
    pub fn me(&self) -> Coord {
        self.me
    }

    /// The position of the opponent.
    pub fn them(&self) -> Coord {
        self.them
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        (0..self.width).contains(&coord.x) && (0..self.height).contains(&coord.y)
    }

    fn index(&self, coord: Coord) -> Option<usize> {
        self.in_bounds(coord)
            .then(|| (coord.y as usize) * (self.width as usize) + coord.x as usize)
    }

    /// The content of a cell. Coordinates outside of the board read as [`Cell::Wall`].
    pub fn cell(&self, coord: Coord) -> Cell {
        self.index(coord).map_or(Cell::Wall, |idx| self.cells[idx])
    }

    /// Whether moving onto this coordinate would crash.
    pub fn is_wall(&self, coord: Coord) -> bool {
        !self.cell(coord).is_passable()
    }

    pub fn is_passable(&self, coord: Coord) -> bool {
        !self.is_wall(coord)
    }

    /// The coordinate next to `origin` in the given direction.
    pub fn rel(&self, direction: Direction, origin: Coord) -> Coord {
        origin.offset(direction)
    }

    pub fn adjacent(&self, origin: Coord) -> [Coord; 4] {
        origin.adjacent()
    }

    /// The directions in which we can move without crashing right away, in the
    /// order of [`Direction::ALL`]. May be empty.
    pub fn passable_directions(&self) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| self.is_passable(self.me.offset(direction)))
            .collect()
    }

    /// Like [`Self::passable_directions()`], but never empty.
    ///
    /// When every direction is blocked the game is lost anyway, and this returns
    /// just [`Direction::North`] so that there is still a move to send.
    pub fn legal_moves(&self) -> Vec<Direction> {
        let moves = self.passable_directions();
        if moves.is_empty() {
            vec![Direction::North]
        } else {
            moves
        }
    }

    /// All cells with their coordinates, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        let width = self.width as usize;
        self.cells.iter().enumerate().map(move |(idx, &cell)| {
            let coord = Coord::new((idx % width) as i32, (idx / width) as i32);
            (coord, cell)
        })
    }

    /// How many cells have the given content.
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }
}

/// Writes the board in the same format that [`Board::read()`] expects.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} {}", self.width, self.height)?;
        for row in self.cells.chunks(self.width as usize) {
            let line: String = row.iter().map(|cell| char::from(cell.to_byte())).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseError;

    /// Parses a single board, e.g. from a map file.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match reader::read_board(&mut Cursor::new(s)) {
            Ok(Some(board)) => Ok(board),
            Ok(None) => Err(ParseError::MalformedHeader {
                line: String::new(),
            }),
            Err(ReadBoardError::Parse(err)) => Err(err),
            // Reading from memory does not fail.
            Err(ReadBoardError::Io(err)) => unreachable!("{}", err),
        }
    }
}

#[cfg(test)]
mod tests {
    use quickcheck::quickcheck;

    use super::*;
    use crate::arbitrary::BoardMap;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    quickcheck! {
        fn outside_is_wall(map: BoardMap, coord: Coord) -> bool {
            let board = board(&map.text);
            board.in_bounds(coord) || board.is_wall(coord)
        }

        fn border_is_wall(map: BoardMap) -> bool {
            let board = board(&map.text);
            let (w, h) = (board.width(), board.height());
            let columns = (-1..=w).flat_map(|x| [Coord::new(x, -1), Coord::new(x, h)]);
            let rows = (-1..=h).flat_map(|y| [Coord::new(-1, y), Coord::new(w, y)]);
            columns
                .chain(rows)
                .all(|coord| !board.in_bounds(coord) && board.is_wall(coord) && board.cell(coord) == Cell::Wall)
        }

        fn exactly_one_of_each_player(map: BoardMap) -> bool {
            let board = board(&map.text);
            board.me() == map.me
                && board.them() == map.them
                && board.count(Cell::Player1) == 1
                && board.count(Cell::Player2) == 1
                && board.cell(board.me()) == Cell::Player1
                && board.cell(board.them()) == Cell::Player2
        }

        fn parsing_is_deterministic(map: BoardMap) -> bool {
            map.text.parse::<Board>() == map.text.parse::<Board>()
        }

        fn display_reproduces_map(map: BoardMap) -> bool {
            let board = board(&map.text);
            board.to_string() == map.text.replace('\r', "")
        }

        fn legal_moves_are_never_empty(map: BoardMap) -> bool {
            let board = board(&map.text);
            let moves = board.legal_moves();
            !moves.is_empty()
                && moves.iter().all(|&d| board.is_passable(board.me().offset(d)))
                    == !board.passable_directions().is_empty()
        }

        fn iter_agrees_with_cell(map: BoardMap) -> bool {
            let board = board(&map.text);
            board.iter().count() == (board.width() * board.height()) as usize
                && board.iter().all(|(coord, cell)| board.in_bounds(coord) && board.cell(coord) == cell)
        }
    }

    #[test]
    fn corner_start() {
        let board = board("2 2\n1 \n 2\n");
        assert_eq!(board.me(), Coord::new(0, 0));
        assert_eq!(board.them(), Coord::new(1, 1));
        assert_eq!(board.legal_moves(), vec![Direction::East, Direction::South]);
        assert!(board.is_wall(Coord::new(0, -1)));
        assert!(board.is_wall(Coord::new(-1, 0)));
    }

    #[test]
    fn players_block_movement() {
        let board = board("3 1\n12 \n");
        assert!(board.is_wall(board.them()));
        assert!(board.passable_directions().is_empty());
        assert_eq!(board.legal_moves(), vec![Direction::North]);
    }

    #[test]
    fn boxed_in_falls_back_to_north() {
        let board = board("3 3\n#2#\n#1#\n###\n");
        assert!(board.passable_directions().is_empty());
        assert_eq!(board.legal_moves(), vec![Direction::North]);
    }

    #[test]
    fn legal_moves_keep_direction_order() {
        let board = board("3 3\n   \n 1 \n  2\n");
        assert_eq!(board.legal_moves(), Direction::ALL.to_vec());
        let board = board_with_walls();
        assert_eq!(board.legal_moves(), vec![Direction::North, Direction::West]);
    }

    fn board_with_walls() -> Board {
        board("6 4\n######\n## # #\n  1# #\n##2###\n")
    }

    #[test]
    fn queries() {
        let board = board_with_walls();
        assert_eq!((board.width(), board.height()), (6, 4));
        assert_eq!(board.me(), Coord::new(2, 2));
        assert_eq!(board.them(), Coord::new(2, 3));
        assert_eq!(board.rel(Direction::North, board.me()), Coord::new(2, 1));
        assert_eq!(board.cell(Coord::new(2, 1)), Cell::Floor);
        assert_eq!(board.cell(Coord::new(3, 2)), Cell::Wall);
        assert_eq!(board.cell(Coord::new(6, 0)), Cell::Wall);
        assert_eq!(
            board.adjacent(board.me()).map(|coord| board.cell(coord)),
            [Cell::Floor, Cell::Wall, Cell::Player2, Cell::Floor]
        );
        assert_eq!(board.count(Cell::Floor), 5);
        assert_eq!(board.count(Cell::Wall), 17);
    }

    #[test]
    fn display() {
        let text = "6 4\n######\n## # #\n  1# #\n##2###\n";
        assert_eq!(board(text).to_string(), text);
    }

    #[test]
    fn from_str_needs_a_header() {
        assert!(matches!(
            "".parse::<Board>(),
            Err(ParseError::MalformedHeader { .. })
        ));
    }
}
