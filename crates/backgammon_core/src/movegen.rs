use crate::{board::Board, dice::Dice, types::*};

/// Generate all legal single-step moves for `color`, returning a freshly allocated vector.
/// Internally delegates to `legal_moves_into`.
pub fn legal_moves(board: &Board, dice: &Dice, color: Color) -> Vec<Move> {
    let mut out = Vec::with_capacity(32);
    legal_moves_into(board, dice, color, &mut out);
    out
}

/// Generate all legal single-step moves into the provided buffer, reusing it across calls.
///
/// Each distinct unused pip value is evaluated once; doubles are consumed one
/// pip at a time by the caller. Output order is deterministic: ascending pip
/// value, then ascending source point.
pub fn legal_moves_into(board: &Board, dice: &Dice, color: Color, out: &mut Vec<Move>) {
    out.clear();
    let pips = dice.distinct_remaining();
    if board.bar().contains(color) {
        for pip in pips {
            gen_bar_entry(board, color, pip, out);
        }
    } else {
        for pip in pips {
            gen_advances(board, color, pip, out);
        }
    }
}

/// True if `color` may land on a playable point (fewer than two opposing checkers).
fn is_open(board: &Board, color: Color, index: u8) -> bool {
    let p = board.point(index);
    p.color() != Some(color.other()) || p.count() < 2
}

fn gen_bar_entry(board: &Board, color: Color, pip: u8, out: &mut Vec<Move>) {
    let dst = Board::debar_landing_point(color, pip);
    if is_open(board, color, dst) {
        out.push(Move::new(color, BAR, dst, Some(pip)));
    }
}

fn gen_advances(board: &Board, color: Color, pip: u8, out: &mut Vec<Move>) {
    let tray = color.tray();
    let bear_off = board.can_bear_off(color);
    let furthest = board.get_furthest_point_idx(color);

    for &src in board.locations(color) {
        let dst = Board::walk_landing_point(color, src, pip);
        let legal = if (1..=24).contains(&dst) {
            is_open(board, color, dst)
        } else if dst == tray && bear_off {
            // Exact bear-off, or an overshoot by the rearmost checker.
            let exact = (src as i16 - tray as i16).unsigned_abs() as u8;
            pip == exact || (pip > exact && furthest == Some(src))
        } else {
            false
        };
        if legal {
            out.push(Move::new(color, src as i8, dst, Some(pip)));
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
