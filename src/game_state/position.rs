//! Immutable board snapshot.
//!
//! A `Position` is produced in one step by `PositionBuilder::build` and is
//! never mutated afterwards. Applying a move builds a fresh position; the
//! per-side `Player` views are derived on demand and never stored here.

use std::collections::BTreeMap;
use std::fmt;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::board_geometry::row_of;
use crate::game_state::chess_rules::{NUM_TILES, NUM_TILES_PER_ROW};
use crate::game_state::chess_types::{PieceKind, Side, Square};
use crate::game_state::piece::Piece;
use crate::game_state::tile::Tile;
use crate::move_generation::legal_move_generator::generate_pseudo_legal_moves;
use crate::moves::chess_move::Move;
use crate::player::player::{establish_king, Player};
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

/// Back-rank layout from the queen-side rook to the king-side rook.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    tiles: [Tile; NUM_TILES],
    white_pieces: Vec<Piece>,
    black_pieces: Vec<Piece>,
    white_king: Piece,
    black_king: Piece,
    side_to_move: Side,
    en_passant_target: Option<Square>,
}

impl Position {
    #[inline]
    pub fn builder() -> PositionBuilder {
        PositionBuilder::new()
    }

    /// Standard starting layout, White to move.
    pub fn initial() -> Self {
        let mut builder = PositionBuilder::new();

        for (file, kind) in BACK_RANK.iter().enumerate() {
            let file = file as Square;
            builder.set_piece(Piece::new(*kind, Side::Black, file));
            builder.set_piece(Piece::new(PieceKind::Pawn, Side::Black, 8 + file));
            builder.set_piece(Piece::new(PieceKind::Pawn, Side::White, 48 + file));
            builder.set_piece(Piece::new(*kind, Side::White, 56 + file));
        }
        builder.set_side_to_move(Side::White);

        builder
            .build()
            .expect("standard starting layout should always build")
    }

    #[inline]
    pub fn from_fen(fen: &str) -> ChessResult<Self> {
        parse_fen(fen)
    }

    #[inline]
    pub fn to_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn tile(&self, square: Square) -> Option<&Tile> {
        self.tiles.get(square as usize)
    }

    #[inline]
    pub fn tiles(&self) -> &[Tile; NUM_TILES] {
        &self.tiles
    }

    #[inline]
    pub fn piece_at(&self, square: Square) -> Option<&Piece> {
        self.tile(square).and_then(Tile::piece)
    }

    #[inline]
    pub fn is_occupied(&self, square: Square) -> bool {
        self.tile(square).is_some_and(Tile::is_occupied)
    }

    #[inline]
    pub fn white_pieces(&self) -> &[Piece] {
        &self.white_pieces
    }

    #[inline]
    pub fn black_pieces(&self) -> &[Piece] {
        &self.black_pieces
    }

    #[inline]
    pub fn active_pieces(&self, side: Side) -> &[Piece] {
        match side {
            Side::White => &self.white_pieces,
            Side::Black => &self.black_pieces,
        }
    }

    #[inline]
    pub fn king(&self, side: Side) -> &Piece {
        match side {
            Side::White => &self.white_king,
            Side::Black => &self.black_king,
        }
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Pseudo-legal moves of every active piece of `side`, castles excluded.
    #[inline]
    pub fn pseudo_legal_moves(&self, side: Side) -> Vec<Move> {
        generate_pseudo_legal_moves(self, side)
    }

    #[inline]
    pub fn player(&self, side: Side) -> Player<'_> {
        Player::new(self, side)
    }

    #[inline]
    pub fn white_player(&self) -> Player<'_> {
        self.player(Side::White)
    }

    #[inline]
    pub fn black_player(&self) -> Player<'_> {
        self.player(Side::Black)
    }

    #[inline]
    pub fn current_player(&self) -> Player<'_> {
        self.player(self.side_to_move)
    }

    /// Union of both players' legal-move sets, White first.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        let white = self.pseudo_legal_moves(Side::White);
        let black = self.pseudo_legal_moves(Side::Black);

        let white_player = Player::with_moves(self, Side::White, white.clone(), black.clone());
        let black_player = Player::with_moves(self, Side::Black, black, white);

        let mut all = white_player.legal_moves().to_vec();
        all.extend_from_slice(black_player.legal_moves());
        all
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, tile) in self.tiles.iter().enumerate() {
            write!(f, "{:>3}", tile.to_string())?;
            if (index + 1) % NUM_TILES_PER_ROW == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Staging area for a `Position`.
///
/// Pieces are keyed by their own square; nothing is observable until
/// `build` validates the layout and produces the finished snapshot.
#[derive(Debug, Clone)]
pub struct PositionBuilder {
    board_config: BTreeMap<Square, Piece>,
    conflicts: Vec<Square>,
    side_to_move: Side,
    en_passant_target: Option<Square>,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self {
            board_config: BTreeMap::new(),
            conflicts: Vec::new(),
            side_to_move: Side::White,
            en_passant_target: None,
        }
    }
}

impl PositionBuilder {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_piece(&mut self, piece: Piece) -> &mut Self {
        if self.board_config.insert(piece.square, piece).is_some() {
            self.conflicts.push(piece.square);
        }
        self
    }

    pub fn set_side_to_move(&mut self, side: Side) -> &mut Self {
        self.side_to_move = side;
        self
    }

    pub fn set_en_passant_target(&mut self, square: Option<Square>) -> &mut Self {
        self.en_passant_target = square;
        self
    }

    pub fn build(&self) -> ChessResult<Position> {
        if let Some(&square) = self.board_config.keys().find(|&&sq| sq as usize >= NUM_TILES) {
            return Err(ChessErrors::InvalidSquare(i32::from(square)));
        }
        if let Some(&square) = self.conflicts.first() {
            return Err(ChessErrors::DuplicatePiece(square));
        }
        if let Some(square) = self.en_passant_target {
            if square as usize >= NUM_TILES {
                return Err(ChessErrors::InvalidSquare(i32::from(square)));
            }
            // Only the row the opponent's pawn just skipped qualifies.
            if !matches!(
                (self.side_to_move, row_of(square)),
                (Side::White, 2) | (Side::Black, 5)
            ) {
                return Err(ChessErrors::InvalidEnPassantTarget(square));
            }
        }

        let tiles: [Tile; NUM_TILES] = std::array::from_fn(|index| {
            let square = index as Square;
            Tile::create(square, self.board_config.get(&square).copied())
        });

        let white_pieces = calculate_active_pieces(&tiles, Side::White);
        let black_pieces = calculate_active_pieces(&tiles, Side::Black);
        let white_king = establish_king(&white_pieces, Side::White)?;
        let black_king = establish_king(&black_pieces, Side::Black)?;

        Ok(Position {
            tiles,
            white_pieces,
            black_pieces,
            white_king,
            black_king,
            side_to_move: self.side_to_move,
            en_passant_target: self.en_passant_target,
        })
    }
}

fn calculate_active_pieces(tiles: &[Tile; NUM_TILES], side: Side) -> Vec<Piece> {
    tiles
        .iter()
        .filter_map(Tile::piece)
        .filter(|piece| piece.side == side)
        .copied()
        .collect()
}
