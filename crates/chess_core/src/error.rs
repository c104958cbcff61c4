//! Error types for move validation and board setup.

use thiserror::Error;

/// Why a proposed move was rejected.
///
/// Every variant is recoverable: the board the move was tried against is
/// left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MoveError {
    /// Origin is empty or holds a piece of the side not on move.
    #[error("no piece of yours on that square")]
    NoPieceOrWrongTurn,
    #[error("that piece cannot move that way")]
    IllegalShape,
    #[error("the path is blocked")]
    BlockedPath,
    /// Own-piece capture, pawn push onto an occupied square, or pawn
    /// diagonal without an enemy to take.
    #[error("illegal capture")]
    IllegalCapture,
    #[error("castling is not available")]
    CastlingUnavailable,
    /// Squares between king and rook are occupied, or the king is in or
    /// passes through check.
    #[error("castling is blocked")]
    CastlingBlocked,
    #[error("move would leave your king in check")]
    SelfCheck,
    #[error("invalid promotion choice: {0}")]
    InvalidPromotionChoice(String),
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

/// Forsyth-Edwards Notation parsing failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FenError {
    #[error("FEN is empty")]
    Empty,
    #[error("FEN board section must have 8 ranks, found {found}")]
    WrongRankCount { found: usize },
    #[error("invalid piece character '{0}' in FEN")]
    InvalidPiece(char),
    #[error("rank {rank} of FEN has {files} files, expected 8")]
    BadRankLength { rank: usize, files: usize },
    #[error("invalid side to move '{0}', expected 'w' or 'b'")]
    InvalidSideToMove(String),
    #[error("invalid castling character '{0}' in FEN")]
    InvalidCastling(char),
}
