//! 棋盘状态

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::constants::{BOARD_SIZE, CELL_COUNT, DRAW_UTILITY, O_WIN_UTILITY, X_WIN_UTILITY};
use crate::error::GameError;
use crate::piece::{Action, Cell, Player};

/// 八条连线，按 行 -> 列 -> 对角线 的顺序排列
const LINES: [[(usize, usize); 3]; 8] = [
    // 行
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // 列
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // 对角线
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 对局结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// X 胜
    XWins,
    /// O 胜
    OWins,
    /// 和棋
    Draw,
}

impl GameResult {
    /// 对应的效用值
    pub fn utility(&self) -> i32 {
        match self {
            GameResult::XWins => X_WIN_UTILITY,
            GameResult::OWins => O_WIN_UTILITY,
            GameResult::Draw => DRAW_UTILITY,
        }
    }

    /// 获胜方
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameResult::XWins => Some(Player::X),
            GameResult::OWins => Some(Player::O),
            GameResult::Draw => None,
        }
    }
}

/// 棋盘
///
/// 值语义：走子总是返回新棋盘，原棋盘保持不变。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// 3x3 格子，`cells[row][col]`
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// 创建初始（全空）棋盘
    pub fn initial() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// 从格子数组创建棋盘（不检查局面是否可达）
    pub fn from_cells(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// 获取格子数组
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// 获取指定落点的格子，越界返回 None
    pub fn get(&self, action: Action) -> Option<Cell> {
        if action.is_valid() {
            Some(self.cells[action.row as usize][action.col as usize])
        } else {
            None
        }
    }

    /// 统计某一方的棋子数
    pub fn count(&self, player: Player) -> usize {
        let target = Cell::from(player);
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == target)
            .count()
    }

    /// 当前走子方
    ///
    /// X 先手；X 的棋子比 O 多时轮到 O，否则轮到 X。
    pub fn current_player(&self) -> Player {
        if *self == Self::initial() {
            return Player::X;
        }

        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// 所有合法落点（行优先顺序）
    pub fn legal_actions(&self) -> Vec<Action> {
        let mut actions = Vec::with_capacity(CELL_COUNT);
        for row in 0..BOARD_SIZE {
            for col in 0..BOARD_SIZE {
                if self.cells[row][col].is_empty() {
                    actions.push(Action::new(row as u8, col as u8));
                }
            }
        }
        actions
    }

    /// 落子，返回新棋盘
    pub fn apply(&self, action: Action) -> Result<Board, GameError> {
        let Action { row, col } = action;

        let Some(cell) = self.get(action) else {
            debug!(%action, "rejected out-of-bounds move");
            return Err(GameError::OutOfBounds { row, col });
        };

        if !cell.is_empty() {
            debug!(%action, "rejected move onto occupied cell");
            return Err(GameError::OccupiedCell { row, col });
        }

        let player = self.current_player();
        trace!(%player, %action, "move applied");

        Ok(self.place(action, player))
    }

    /// 所有后继局面，顺序与 [`legal_actions`](Self::legal_actions) 一致
    pub fn successors(&self) -> impl Iterator<Item = (Action, Board)> + '_ {
        let player = self.current_player();
        self.legal_actions()
            .into_iter()
            .map(move |action| (action, self.place(action, player)))
    }

    /// 在空格落子（不检查规则）
    fn place(&self, action: Action, player: Player) -> Board {
        let mut next = *self;
        next.cells[action.row as usize][action.col as usize] = Cell::from(player);
        next
    }

    /// 获胜方（按 行 -> 列 -> 对角线 顺序，取第一条连成的线）
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            if a == b && b == c {
                a.player()
            } else {
                None
            }
        })
    }

    /// 棋盘是否已下满
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// 对局是否结束
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 效用值：X 胜 +1，O 胜 -1，其余（含未结束局面）为 0
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => X_WIN_UTILITY,
            Some(Player::O) => O_WIN_UTILITY,
            None => DRAW_UTILITY,
        }
    }

    /// 对局结果，未结束时返回 None
    pub fn outcome(&self) -> Option<GameResult> {
        match self.winner() {
            Some(Player::X) => Some(GameResult::XWins),
            Some(Player::O) => Some(GameResult::OWins),
            None if self.is_full() => Some(GameResult::Draw),
            None => None,
        }
    }

    /// 棋子数是否符合轮流落子（X 与 O 相等或多一枚）
    pub fn is_reachable(&self) -> bool {
        let x = self.count(Player::X);
        let o = self.count(Player::O);
        x == o || x == o + 1
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::notation::Notation;

    fn board(s: &str) -> Board {
        Notation::parse(s).unwrap()
    }

    /// 从初始局面出发枚举所有可达局面（到终局为止）
    fn reachable_boards() -> HashSet<Board> {
        let mut seen = HashSet::new();
        let mut stack = vec![Board::initial()];
        while let Some(b) = stack.pop() {
            if !seen.insert(b) {
                continue;
            }
            if b.is_terminal() {
                continue;
            }
            for action in b.legal_actions() {
                stack.push(b.apply(action).unwrap());
            }
        }
        seen
    }

    #[test]
    fn test_initial_board() {
        let b = Board::initial();
        assert_eq!(b.current_player(), Player::X);
        assert_eq!(b.legal_actions().len(), CELL_COUNT);
        assert_eq!(b.winner(), None);
        assert!(!b.is_terminal());
        assert_eq!(b, Board::initial());
    }

    #[test]
    fn test_current_player_alternates() {
        let b = Board::initial().apply(Action::new(1, 1)).unwrap();
        assert_eq!(b.current_player(), Player::O);

        let b = b.apply(Action::new(0, 0)).unwrap();
        assert_eq!(b.current_player(), Player::X);
        assert_eq!(b.get(Action::new(1, 1)), Some(Cell::X));
        assert_eq!(b.get(Action::new(0, 0)), Some(Cell::O));
    }

    #[test]
    fn test_legal_actions_row_major() {
        let b = board("X.O/.X./O..");
        assert_eq!(
            b.legal_actions(),
            vec![
                Action::new(0, 1),
                Action::new(1, 0),
                Action::new(1, 2),
                Action::new(2, 1),
                Action::new(2, 2),
            ]
        );
    }

    #[test]
    fn test_apply_does_not_mutate() {
        let b = board("X../.O./...");
        let snapshot = b;

        let next = b.apply(Action::new(2, 2)).unwrap();

        assert_eq!(b, snapshot);
        assert_eq!(b.get(Action::new(2, 2)), Some(Cell::Empty));
        assert_eq!(next.get(Action::new(2, 2)), Some(Cell::X));
    }

    #[test]
    fn test_apply_out_of_bounds() {
        let b = Board::initial();
        assert_eq!(
            b.apply(Action::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            b.apply(Action::new(0, 7)),
            Err(GameError::OutOfBounds { row: 0, col: 7 })
        );
        assert_eq!(
            b.apply(Action::new(255, 255)),
            Err(GameError::OutOfBounds { row: 255, col: 255 })
        );
    }

    #[test]
    fn test_apply_occupied_cell() {
        let b = board("X../.../...");
        assert_eq!(
            b.apply(Action::new(0, 0)),
            Err(GameError::OccupiedCell { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_winner_all_lines() {
        let cases = [
            ("XXX/OO./...", Player::X),
            ("OO./XXX/X..", Player::X),
            ("OO./.O./XXX", Player::X),
            ("X../XO./XO.", Player::X),
            ("OX./.X./.XO", Player::X),
            (".OX/.OX/..X", Player::X),
            ("XO./.XO/..X", Player::X),
            ("X.O/XO./O.X", Player::O),
        ];

        for (s, expected) in cases {
            assert_eq!(board(s).winner(), Some(expected), "board {}", s);
        }

        assert_eq!(board("OOO/XX./X.X").winner(), Some(Player::O));
    }

    #[test]
    fn test_winner_none() {
        assert_eq!(Board::initial().winner(), None);
        assert_eq!(board("XOX/XOO/OXX").winner(), None);
        assert_eq!(board("XX./OO./...").winner(), None);
    }

    #[test]
    fn test_terminal_and_utility() {
        let draw = board("XOX/XOO/OXX");
        assert!(draw.is_full());
        assert!(draw.is_terminal());
        assert_eq!(draw.utility(), 0);
        assert_eq!(draw.outcome(), Some(GameResult::Draw));

        let x_wins = board("XXX/OO./...");
        assert!(x_wins.is_terminal());
        assert_eq!(x_wins.utility(), 1);
        assert_eq!(x_wins.outcome(), Some(GameResult::XWins));

        let o_wins = board("OOO/XX./X..");
        assert_eq!(o_wins.utility(), -1);
        assert_eq!(o_wins.outcome(), Some(GameResult::OWins));

        let in_progress = board("X../.O./...");
        assert!(!in_progress.is_terminal());
        assert_eq!(in_progress.utility(), 0);
        assert_eq!(in_progress.outcome(), None);
    }

    #[test]
    fn test_reachable_positions() {
        let boards = reachable_boards();
        assert_eq!(boards.len(), 5478);

        for b in &boards {
            let x = b.count(Player::X);
            let o = b.count(Player::O);
            assert!(b.is_reachable());
            assert_eq!(x == o, b.current_player() == Player::X);
            assert_eq!(b.is_terminal(), b.winner().is_some() || b.is_full());

            match b.winner() {
                Some(Player::X) => assert_eq!(b.utility(), 1),
                Some(Player::O) => assert_eq!(b.utility(), -1),
                None => assert_eq!(b.utility(), 0),
            }
        }
    }

    #[test]
    fn test_apply_places_current_player_mark() {
        for b in reachable_boards().into_iter().filter(|b| !b.is_terminal()) {
            let player = b.current_player();
            for action in b.legal_actions() {
                let next = b.apply(action).unwrap();
                assert_eq!(next.get(action), Some(Cell::from(player)));
                assert_eq!(next.count(player), b.count(player) + 1);
            }
        }
    }

    #[test]
    fn test_successors_match_apply() {
        let b = board("X../.O./...");
        let successors: Vec<_> = b.successors().collect();

        assert_eq!(successors.len(), 7);
        for (action, next) in successors {
            assert_eq!(Ok(next), b.apply(action));
        }
    }

    #[test]
    fn test_is_reachable() {
        assert!(board("XX./O../...").is_reachable());
        assert!(!board("OO./X../...").is_reachable());
        assert!(!board("XXX/.../...").is_reachable());
    }
}
