//! End-to-end editing scenarios driven through input intents.

use kurbo::Point;
use sketchboard_core::{
    Canvas, Element, ElementKind, Handle, History, InputEvent, Mode, MouseButton, Position, Scene,
    ToolKind, pick,
};
use sketchboard_core::shapes::Freehand;
use sketchboard_core::viewport::{MAX_SCALE, MIN_SCALE};

fn replay(canvas: &mut Canvas, events: &[InputEvent]) {
    for event in events {
        canvas.handle_event(event).unwrap();
    }
}

fn stroke(tool: ToolKind, from: Point, to: Point) -> Vec<InputEvent> {
    vec![
        InputEvent::SetTool { tool },
        InputEvent::PointerDown {
            position: from,
            button: MouseButton::Left,
        },
        InputEvent::PointerMove { position: to },
        InputEvent::PointerUp {
            position: to,
            button: MouseButton::Left,
        },
    ]
}

#[test]
fn draw_rectangle_commits_normalized_bounds() {
    let mut canvas = Canvas::new();
    replay(
        &mut canvas,
        &stroke(ToolKind::Rectangle, Point::new(10.0, 10.0), Point::new(50.0, 40.0)),
    );

    let scene = canvas.scene();
    assert_eq!(scene.len(), 1);
    let element = scene.get(0).unwrap();
    assert_eq!(element.kind(), ElementKind::Rectangle);
    assert_eq!(
        element.corners(),
        Some((Point::new(10.0, 10.0), Point::new(50.0, 40.0)))
    );
    assert_eq!(canvas.mode(), Mode::Idle);
}

#[test]
fn drag_line_start_handle() {
    let mut canvas = Canvas::new();
    replay(
        &mut canvas,
        &stroke(ToolKind::Line, Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
    );

    canvas.set_tool(ToolKind::Selection);
    canvas.pointer_down(Point::new(0.0, 0.0), MouseButton::Left).unwrap();
    assert_eq!(canvas.mode(), Mode::Resizing);
    canvas.pointer_move(Point::new(5.0, 5.0)).unwrap();
    assert_eq!(
        canvas.scene().get(0).and_then(Element::corners),
        Some((Point::new(5.0, 5.0), Point::new(10.0, 10.0)))
    );

    canvas.pointer_up(Point::new(5.0, 5.0), MouseButton::Left).unwrap();
    assert_eq!(
        canvas.scene().get(0).and_then(Element::corners),
        Some((Point::new(5.0, 5.0), Point::new(10.0, 10.0)))
    );
}

#[test]
fn drag_line_end_past_start_flips_on_release() {
    let mut canvas = Canvas::new();
    replay(
        &mut canvas,
        &stroke(ToolKind::Line, Point::new(10.0, 10.0), Point::new(50.0, 10.0)),
    );

    canvas.set_tool(ToolKind::Selection);
    canvas.pointer_down(Point::new(50.0, 10.0), MouseButton::Left).unwrap();
    canvas.pointer_move(Point::new(0.0, 30.0)).unwrap();
    // The end handle stays the end handle for the rest of the drag.
    assert_eq!(
        canvas.scene().get(0).and_then(Element::corners),
        Some((Point::new(10.0, 10.0), Point::new(0.0, 30.0)))
    );
    canvas.pointer_up(Point::new(0.0, 30.0), MouseButton::Left).unwrap();
    assert_eq!(
        canvas.scene().get(0).and_then(Element::corners),
        Some((Point::new(0.0, 30.0), Point::new(10.0, 10.0)))
    );
}

#[test]
fn freehand_pick() {
    let mut scene = Scene::new();
    scene
        .push(Element::Freehand(Freehand::from_points(
            0,
            vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)],
        )))
        .unwrap();

    let (element, position) = pick(Point::new(5.0, 0.0), &scene).unwrap();
    assert_eq!(element.id(), 0);
    assert_eq!(position, Position::Inside);
    assert!(pick(Point::new(5.0, 10.0), &scene).is_none());
}

#[test]
fn pick_returns_last_drawn() {
    let mut canvas = Canvas::new();
    replay(
        &mut canvas,
        &stroke(ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(100.0, 100.0)),
    );
    replay(
        &mut canvas,
        &stroke(ToolKind::Line, Point::new(0.0, 50.0), Point::new(100.0, 50.0)),
    );

    let (element, position) = pick(Point::new(50.0, 50.0), canvas.scene()).unwrap();
    assert_eq!(element.id(), 1);
    assert_eq!(position, Position::Inside);

    let (element, position) = pick(Point::new(100.0, 100.0), canvas.scene()).unwrap();
    assert_eq!(element.id(), 0);
    assert_eq!(position, Position::Handle(Handle::BottomRight));
}

#[test]
fn zoom_clamps() {
    let mut canvas = Canvas::new();
    for _ in 0..3 {
        canvas.zoom(0.5);
        assert!(canvas.viewport().scale <= MAX_SCALE);
    }
    for _ in 0..50 {
        canvas.zoom(0.5);
    }
    assert!((canvas.viewport().scale - MAX_SCALE).abs() < f64::EPSILON);

    canvas.reset_zoom();
    for _ in 0..4 {
        canvas.zoom(-5.0);
        assert!(canvas.viewport().scale > 0.0);
        assert!((canvas.viewport().scale - MIN_SCALE).abs() < f64::EPSILON);
    }
}

#[test]
fn history_undo_undo_redo() {
    let s0 = Scene::new();
    let mut s1 = Scene::new();
    s1.push(Element::create(0, Point::ZERO, Point::new(1.0, 1.0), ElementKind::Line))
        .unwrap();
    let mut s2 = s1.clone();
    s2.push(Element::create(1, Point::ZERO, Point::new(2.0, 2.0), ElementKind::Rectangle))
        .unwrap();

    let mut history = History::new(s0.clone());
    history.commit(s1.clone());
    history.commit(s2);
    history.undo();
    history.undo();
    assert_eq!(history.current(), &s0);
    history.redo();
    assert_eq!(history.current(), &s1);
}

#[test]
fn undo_then_draw_discards_redo_tail() {
    let mut canvas = Canvas::new();
    replay(
        &mut canvas,
        &stroke(ToolKind::Rectangle, Point::new(0.0, 0.0), Point::new(10.0, 10.0)),
    );
    replay(
        &mut canvas,
        &stroke(ToolKind::Rectangle, Point::new(20.0, 0.0), Point::new(30.0, 10.0)),
    );
    assert!(canvas.undo());
    replay(
        &mut canvas,
        &stroke(ToolKind::Line, Point::new(0.0, 50.0), Point::new(30.0, 50.0)),
    );

    let history = canvas.history();
    assert_eq!(history.len(), history.index() + 1);
    assert!(!canvas.redo());
    assert_eq!(canvas.scene().len(), 2);
    assert_eq!(canvas.scene().get(1).map(Element::kind), Some(ElementKind::Line));
}

#[test]
fn drawing_survives_zoom_and_pan_mid_gesture() {
    let mut canvas = Canvas::new();
    canvas.set_tool(ToolKind::Rectangle);
    canvas.pointer_down(Point::new(10.0, 10.0), MouseButton::Left).unwrap();
    canvas.wheel(kurbo::Vec2::new(-10.0, -10.0));
    canvas.pointer_move(Point::new(60.0, 60.0)).unwrap();
    canvas.pointer_up(Point::new(60.0, 60.0), MouseButton::Left).unwrap();

    // The far corner is converted with the panned viewport.
    assert_eq!(
        canvas.scene().get(0).and_then(Element::corners),
        Some((Point::new(10.0, 10.0), Point::new(50.0, 50.0)))
    );
}

#[test]
fn session_replays_from_json() {
    let events: Vec<InputEvent> = serde_json::from_str(
        r#"[
            {"event": "set_tool", "tool": "text"},
            {"event": "pointer_down", "position": {"x": 10.0, "y": 20.0}},
            {"event": "pointer_up", "position": {"x": 10.0, "y": 20.0}},
            {"event": "text_committed", "content": "hi"},
            {"event": "set_tool", "tool": "pencil"},
            {"event": "pointer_down", "position": {"x": 0.0, "y": 0.0}},
            {"event": "pointer_move", "position": {"x": 5.0, "y": 5.0}},
            {"event": "pointer_up", "position": {"x": 5.0, "y": 5.0}}
        ]"#,
    )
    .unwrap();

    let mut canvas = Canvas::new();
    replay(&mut canvas, &events);

    assert_eq!(canvas.scene().len(), 2);
    assert_eq!(canvas.scene().get(0).map(Element::kind), Some(ElementKind::Text));
    assert_eq!(canvas.scene().get(1).map(Element::kind), Some(ElementKind::Freehand));
    assert_eq!(canvas.history().len(), 3);

    let json = serde_json::to_string(canvas.scene()).unwrap();
    let back: Scene = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, canvas.scene());
}
