//! Wall and overlap detection.

use crate::board::Board;
use crate::error::AnchorNotSetError;
use crate::piece::Piece;
use tracing::instrument;

/// Whether any square of `piece` would lie outside the board.
#[instrument(level = "trace", skip(board, piece), fields(kind = %piece.kind(), anchor = ?piece.anchor()))]
pub fn any_wall_collision(board: &Board, piece: &Piece) -> Result<bool, AnchorNotSetError> {
    Ok(piece
        .squares()?
        .into_iter()
        .any(|square| !board.contains(square)))
}

/// Whether any square of `piece` would lie outside the board or on a
/// covered cell.
#[instrument(level = "trace", skip(board, piece), fields(kind = %piece.kind(), anchor = ?piece.anchor()))]
pub fn any_collision(board: &Board, piece: &Piece) -> Result<bool, AnchorNotSetError> {
    Ok(piece
        .squares()?
        .into_iter()
        .any(|square| !board.is_empty_at(square)))
}
