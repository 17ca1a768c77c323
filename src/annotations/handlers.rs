//! Pointer message handlers
//!
//! Pen ink is committed segment by segment as the pointer moves. The other
//! tools draw into the preview layer while dragging and commit exactly once
//! on release.

use super::gesture::{Gesture, ToolState};
use crate::config::Tool;
use crate::domain::{ArrowMark, HighlighterMark, Mark, PenSegment, Point, RectMark};
use crate::render::geometry::highlighter;
use crate::render::pixmap::{draw_arrow, draw_highlighter, draw_mark, draw_rect};
use crate::session::messages::PointerMsg;
use crate::session::state::Session;

/// Handle a pointer message for an open session
pub fn handle_pointer_msg(session: &mut Session, msg: PointerMsg) {
    match msg {
        PointerMsg::Down(p) => handle_start(session, p),
        PointerMsg::Move(p) => handle_move(session, p),
        PointerMsg::Up(p) | PointerMsg::Leave(p) => handle_end(session, p),
    }
}

fn handle_start(session: &mut Session, p: Point) {
    if session.state.is_gesturing() {
        log::debug!("Ignoring pointer-down while a gesture is active");
        return;
    }
    log::debug!("{} gesture started at ({}, {})", session.tool.name(), p.x, p.y);
    session.state = ToolState::Gesturing(Gesture::start(session.tool, session.color, p));
}

fn handle_move(session: &mut Session, p: Point) {
    let ToolState::Gesturing(gesture) = &mut session.state else {
        return;
    };
    let surfaces = &mut session.surfaces;

    match gesture.tool {
        Tool::Pen => {
            let mark = Mark::Pen(PenSegment {
                from: gesture.last,
                to: p,
                color: gesture.color,
            });
            draw_mark(surfaces.committed_mut(), &mark);
            session.marks.push(mark);
        }
        Tool::Highlighter => {
            gesture.points.push(p);
            surfaces.clear_preview();
            draw_highlighter(surfaces.preview_mut(), &gesture.points, gesture.color);
        }
        Tool::Rectangle => {
            surfaces.clear_preview();
            draw_rect(surfaces.preview_mut(), gesture.origin, p, gesture.color);
        }
        Tool::Arrow => {
            surfaces.clear_preview();
            draw_arrow(surfaces.preview_mut(), gesture.origin, p, gesture.color);
        }
    }

    gesture.last = p;
    surfaces.render();
}

fn handle_end(session: &mut Session, p: Point) {
    let Some(gesture) = session.state.take() else {
        return;
    };
    let tool = gesture.tool;

    let mark = match tool {
        // Already committed while moving
        Tool::Pen => None,
        Tool::Rectangle => Some(Mark::Rectangle(RectMark {
            start: gesture.origin,
            end: p,
            color: gesture.color,
        })),
        Tool::Arrow => Some(Mark::Arrow(ArrowMark {
            start: gesture.origin,
            end: p,
            color: gesture.color,
        })),
        Tool::Highlighter if gesture.points.len() >= highlighter::MIN_POINTS => {
            Some(Mark::Highlighter(HighlighterMark {
                points: gesture.points,
                color: gesture.color,
            }))
        }
        Tool::Highlighter => {
            log::debug!("Highlighter gesture too short, nothing committed");
            None
        }
    };
    if let Some(mark) = mark {
        commit(session, mark);
    }

    session.surfaces.clear_preview();
    session.surfaces.render();
    session.apply_pending_selection();
    log::debug!("{} gesture ended at ({}, {})", tool.name(), p.x, p.y);
}

/// Draw a finished mark onto the committed layer and record it
fn commit(session: &mut Session, mark: Mark) {
    draw_mark(session.surfaces.committed_mut(), &mark);
    session.marks.push(mark);
}
