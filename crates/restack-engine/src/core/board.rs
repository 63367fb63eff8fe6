use serde::{Deserialize, Serialize};

use crate::MoveError;

/// Identifier of a single block, unique within a level (`1..=N`).
pub type BlockId = u8;

/// One stack of blocks, ordered bottom to top (last element = topmost).
pub type Column = Vec<BlockId>;

/// Board geometry: how many columns exist and how many blocks each may hold.
///
/// Shape is a construction-time configuration value rather than a hardcoded
/// literal, so alternative board shapes are a configuration change. The
/// built-in catalog is authored for [`BoardShape::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardShape {
    pub columns: usize,
    pub capacity: usize,
}

impl BoardShape {
    /// Three columns, at most four blocks per column.
    pub const STANDARD: Self = Self {
        columns: 3,
        capacity: 4,
    };
}

impl Default for BoardShape {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// A proposed relocation of one block between two columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub block: BlockId,
    pub from: usize,
    pub to: usize,
}

/// The live puzzle state: a fixed set of columns of uniquely-identified blocks.
///
/// A board is created from a level's initial layout at round start and mutated
/// in place by successive legal moves. Moves relocate blocks, never create or
/// destroy them, so the multiset of block ids is conserved across every legal
/// move.
///
/// # Example
///
/// ```
/// use restack_engine::{Board, BoardShape, Move};
///
/// let mut board = Board::from_layout(BoardShape::STANDARD, &[vec![1], vec![2], vec![3]]);
/// board.apply_move(Move { block: 1, from: 0, to: 1 }).unwrap();
/// assert_eq!(board.columns()[1], vec![2, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: Vec<Column>,
    capacity: usize,
}

impl Board {
    /// Creates a board from an authored layout.
    ///
    /// The layout is resized to the shape's column count: missing columns
    /// start empty, surplus columns are dropped. Column depth is not checked
    /// here; capacity is enforced per move by [`Self::check_move`].
    #[must_use]
    pub fn from_layout(shape: BoardShape, layout: &[Column]) -> Self {
        let mut columns = layout.to_vec();
        columns.resize(shape.columns, Column::new());
        Self {
            columns,
            capacity: shape.capacity,
        }
    }

    #[must_use]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns all block ids on the board, column by column, bottom to top.
    pub fn blocks(&self) -> impl Iterator<Item = BlockId> + '_ {
        self.columns.iter().flatten().copied()
    }

    /// Checks whether a move is legal without applying it.
    ///
    /// A move is legal when source and destination are distinct in-range
    /// columns, the moved block is the exposed top block of its source
    /// column, and the destination column is below capacity. There is no
    /// larger-on-smaller ordering rule: any top block may land on any
    /// non-full column.
    pub fn check_move(&self, mv: Move) -> Result<(), MoveError> {
        if mv.from == mv.to {
            return Err(MoveError::SameColumn);
        }
        if mv.from >= self.columns.len() || mv.to >= self.columns.len() {
            return Err(MoveError::ColumnOutOfRange);
        }
        let Some(&top) = self.columns[mv.from].last() else {
            return Err(MoveError::EmptySource);
        };
        if top != mv.block {
            return Err(MoveError::NotTopmost);
        }
        if self.columns[mv.to].len() >= self.capacity {
            return Err(MoveError::DestinationFull);
        }
        Ok(())
    }

    /// Applies a move if it is legal.
    ///
    /// On rejection the board is left untouched. Win detection and scoring
    /// are separate, explicit subsequent calls.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), MoveError> {
        self.check_move(mv)?;
        let block = self.columns[mv.from]
            .pop()
            .expect("check_move verified the source column is non-empty");
        self.columns[mv.to].push(block);
        Ok(())
    }

    /// True iff every column equals the corresponding target column exactly.
    ///
    /// Order-sensitive and column-position-sensitive: the target pins which
    /// column holds which stack, not merely that some column matches.
    #[must_use]
    pub fn matches(&self, target: &[Column]) -> bool {
        self.columns.len() == target.len()
            && self.columns.iter().zip(target).all(|(col, tgt)| col == tgt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(layout: &[&[BlockId]]) -> Board {
        let layout: Vec<Column> = layout.iter().map(|col| col.to_vec()).collect();
        Board::from_layout(BoardShape::STANDARD, &layout)
    }

    fn sorted_blocks(board: &Board) -> Vec<BlockId> {
        let mut blocks: Vec<_> = board.blocks().collect();
        blocks.sort_unstable();
        blocks
    }

    mod legality {
        use super::*;

        #[test]
        fn moves_exposed_top_block() {
            let mut board = board(&[&[1, 2], &[3], &[]]);
            board
                .apply_move(Move {
                    block: 2,
                    from: 0,
                    to: 2,
                })
                .unwrap();
            assert_eq!(board.columns(), [vec![1], vec![3], vec![2]]);
        }

        #[test]
        fn rejects_covered_block_and_leaves_board_unchanged() {
            let mut board = board(&[&[1, 2], &[3], &[]]);
            let before = board.clone();
            let result = board.apply_move(Move {
                block: 1,
                from: 0,
                to: 2,
            });
            assert_eq!(result, Err(MoveError::NotTopmost));
            assert_eq!(board, before);
        }

        #[test]
        fn rejects_block_absent_from_source_column() {
            let board = board(&[&[1, 2], &[3], &[]]);
            let result = board.check_move(Move {
                block: 3,
                from: 0,
                to: 2,
            });
            assert_eq!(result, Err(MoveError::NotTopmost));
        }

        #[test]
        fn rejects_same_column_move() {
            let board = board(&[&[1], &[2], &[3]]);
            let result = board.check_move(Move {
                block: 1,
                from: 0,
                to: 0,
            });
            assert_eq!(result, Err(MoveError::SameColumn));
        }

        #[test]
        fn rejects_empty_source_column() {
            let board = board(&[&[], &[2], &[3]]);
            let result = board.check_move(Move {
                block: 2,
                from: 0,
                to: 1,
            });
            assert_eq!(result, Err(MoveError::EmptySource));
        }

        #[test]
        fn rejects_out_of_range_columns() {
            let board = board(&[&[1], &[2], &[3]]);
            assert_eq!(
                board.check_move(Move {
                    block: 1,
                    from: 0,
                    to: 3,
                }),
                Err(MoveError::ColumnOutOfRange)
            );
            assert_eq!(
                board.check_move(Move {
                    block: 1,
                    from: 5,
                    to: 1,
                }),
                Err(MoveError::ColumnOutOfRange)
            );
        }

        #[test]
        fn rejects_move_into_full_column() {
            let mut board = board(&[&[1, 2, 3, 4], &[5], &[]]);
            let before = board.clone();
            let result = board.apply_move(Move {
                block: 5,
                from: 1,
                to: 0,
            });
            assert_eq!(result, Err(MoveError::DestinationFull));
            assert_eq!(board, before);
        }

        #[test]
        fn no_size_ordering_rule() {
            // Unlike classic Hanoi, a higher-numbered block may land on a
            // lower-numbered one and vice versa.
            let mut board = board(&[&[5], &[1], &[]]);
            board
                .apply_move(Move {
                    block: 5,
                    from: 0,
                    to: 1,
                })
                .unwrap();
            assert_eq!(board.columns()[1], vec![1, 5]);
        }
    }

    mod conservation {
        use super::*;

        #[test]
        fn legal_moves_conserve_the_block_multiset() {
            let mut board = board(&[&[1, 2], &[3, 4], &[5]]);
            let before = sorted_blocks(&board);
            let moves = [
                Move {
                    block: 2,
                    from: 0,
                    to: 2,
                },
                Move {
                    block: 4,
                    from: 1,
                    to: 0,
                },
                Move {
                    block: 2,
                    from: 2,
                    to: 1,
                },
                Move {
                    block: 5,
                    from: 2,
                    to: 1,
                },
            ];
            for mv in moves {
                board.apply_move(mv).unwrap();
                assert_eq!(sorted_blocks(&board), before);
            }
        }
    }

    mod win_detection {
        use super::*;

        #[test]
        fn exact_match_is_solved() {
            let board = board(&[&[3, 2, 1], &[], &[]]);
            assert!(board.matches(&[vec![3, 2, 1], vec![], vec![]]));
        }

        #[test]
        fn same_stack_in_a_different_column_is_not_solved() {
            let board = board(&[&[], &[3, 2, 1], &[]]);
            assert!(!board.matches(&[vec![3, 2, 1], vec![], vec![]]));
        }

        #[test]
        fn same_blocks_in_a_different_order_is_not_solved() {
            let board = board(&[&[1, 2, 3], &[], &[]]);
            assert!(!board.matches(&[vec![3, 2, 1], vec![], vec![]]));
        }
    }

    mod layout {
        use super::*;

        #[test]
        fn missing_columns_start_empty() {
            let board = Board::from_layout(BoardShape::STANDARD, &[vec![1, 2]]);
            assert_eq!(board.columns(), [vec![1, 2], vec![], vec![]]);
        }

        #[test]
        fn shape_is_configurable() {
            let shape = BoardShape {
                columns: 4,
                capacity: 2,
            };
            let mut board = Board::from_layout(shape, &[vec![1], vec![2, 3]]);
            assert_eq!(board.columns().len(), 4);
            let result = board.apply_move(Move {
                block: 1,
                from: 0,
                to: 1,
            });
            assert_eq!(result, Err(MoveError::DestinationFull));
        }
    }
}
