//! End-to-end editing scenarios through the public API

use ginotate::domain::{Mark, Point};
use ginotate::render::geometry::arrow;
use ginotate::{Editor, EditorMsg, EditorOutcome, HostAdapter, SourceImage, StrokeColor, Tool};
use image::{Rgba, RgbaImage};
use tiny_skia::Pixmap;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLUE: [u8; 4] = [0x00, 0x7a, 0xff, 0xff];

fn gradient(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 13 % 256) as u8, 90, 255])
    })
}

fn assert_color_near(actual: &Rgba<u8>, expected: [u8; 4]) {
    for (a, e) in actual.0.iter().zip(expected) {
        assert!(a.abs_diff(e) <= 1, "{actual:?} != {expected:?}");
    }
}

fn is_transparent(pixmap: &Pixmap) -> bool {
    pixmap.pixels().iter().all(|p| p.alpha() == 0)
}

fn committed_alpha(editor: &Editor, x: u32, y: u32) -> u8 {
    editor
        .session()
        .and_then(|s| s.surfaces().committed().pixel(x, y))
        .map(|p| p.alpha())
        .unwrap_or_default()
}

#[test]
fn merge_without_gestures_is_pixel_identical() {
    let translucent = RgbaImage::from_fn(9, 7, |x, y| Rgba([200, x as u8 * 20, y as u8, (x * y) as u8]));
    for source in [gradient(64, 48), translucent, RgbaImage::from_pixel(1, 1, WHITE)] {
        let mut editor = Editor::new();
        editor.open_image(source.clone()).unwrap();
        assert_eq!(editor.close(true), Some(source));
    }
}

#[test]
fn encoded_png_opens_at_natural_size() {
    let source = gradient(33, 21);
    let png = SourceImage {
        rgba: source.clone(),
        encoding: ginotate::capture::image::Encoding {
            format: image::ImageFormat::Png,
            data_url: false,
        },
        logical_size: (33, 21),
    }
    .encode()
    .unwrap();

    let mut editor = Editor::new();
    editor.open(&png).unwrap();
    let surfaces = editor.session().unwrap().surfaces();
    assert_eq!((surfaces.width(), surfaces.height()), (33, 21));
    assert_eq!(editor.close(true), Some(source));
}

#[test]
fn blue_rectangle_scenario() {
    let source = RgbaImage::from_pixel(200, 100, WHITE);
    let mut editor = Editor::new();
    editor.open_image(source.clone()).unwrap();
    editor.update(EditorMsg::SelectTool(Tool::Rectangle));
    editor.update(EditorMsg::SelectColor(StrokeColor::Blue));
    editor.update(EditorMsg::down(10.0, 10.0));
    editor.update(EditorMsg::moved(60.0, 50.0));
    editor.update(EditorMsg::moved(100.0, 80.0));
    editor.update(EditorMsg::up(100.0, 80.0));
    let merged = editor.close(true).unwrap();

    // On each edge of the outline
    for (x, y) in [(10, 45), (100, 45), (55, 10), (55, 80)] {
        assert_color_near(merged.get_pixel(x, y), BLUE);
    }

    // Well clear of the 3px stroke band, nothing changed
    for (x, y, px) in merged.enumerate_pixels() {
        let outside = x <= 6 || x >= 103 || y <= 6 || y >= 83;
        let inside = (13..=96).contains(&x) && (13..=76).contains(&y);
        if outside || inside {
            assert_eq!(px, source.get_pixel(x, y), "pixel ({x}, {y}) changed");
        }
    }
}

#[test]
fn single_click_highlighter_leaves_image_untouched() {
    let source = gradient(80, 60);
    let mut editor = Editor::new();
    editor.open_image(source.clone()).unwrap();
    editor.update(EditorMsg::SelectTool(Tool::Highlighter));
    editor.update(EditorMsg::down(40.0, 30.0));
    editor.update(EditorMsg::up(40.0, 30.0));
    assert!(editor.session().unwrap().marks().is_empty());
    assert_eq!(editor.update(EditorMsg::Done), Some(ginotate::Closed::Saved(source)));
}

#[test]
fn horizontal_arrow_scenario() {
    let mut editor = Editor::new();
    editor.open_image(RgbaImage::from_pixel(120, 40, WHITE)).unwrap();
    editor.update(EditorMsg::SelectTool(Tool::Arrow));
    editor.update(EditorMsg::down(0.0, 0.0));
    editor.update(EditorMsg::moved(50.0, 0.0));
    editor.update(EditorMsg::up(100.0, 0.0));

    let marks = editor.session().unwrap().marks();
    assert_eq!(marks.len(), 1);
    let Mark::Arrow(mark) = &marks[0] else {
        panic!("expected arrow, got {:?}", marks[0]);
    };
    assert_eq!(mark.start, Point::new(0.0, 0.0));
    assert_eq!(mark.end, Point::new(100.0, 0.0));

    let (h1, h2) = arrow::head_points(mark.start, mark.end);
    let tip = mark.end;
    for h in [h1, h2] {
        assert!((tip.distance(h) - 15.0).abs() < 1e-3);
        let edge_angle = (tip.y - h.y).atan2(tip.x - h.x).abs();
        assert!((edge_angle - 30.0_f32.to_radians()).abs() < 1e-3);
    }
    assert!((h1.y + h2.y).abs() < 1e-3);

    // Shaft along the top row, filled head near the tip, nothing elsewhere
    assert_eq!(committed_alpha(&editor, 50, 0), 255);
    assert_eq!(committed_alpha(&editor, 92, 3), 255);
    assert_eq!(committed_alpha(&editor, 92, 6), 0);
    assert_eq!(committed_alpha(&editor, 80, 3), 0);
    assert_eq!(committed_alpha(&editor, 110, 0), 0);
}

#[test]
fn pen_commits_connected_segments_without_preview() {
    let mut editor = Editor::new();
    editor.open_image(gradient(100, 100)).unwrap();
    editor.update(EditorMsg::down(5.0, 5.0));
    let samples: Vec<Point> = (1..=12)
        .map(|i| Point::new(5.0 + i as f32 * 7.0, 5.0 + (i * i % 40) as f32))
        .collect();
    for p in &samples {
        editor.update(EditorMsg::moved(p.x, p.y));
        assert!(is_transparent(editor.session().unwrap().surfaces().preview()));
    }
    editor.update(EditorMsg::up(samples[11].x, samples[11].y));

    let marks = editor.session().unwrap().marks();
    assert_eq!(marks.len(), samples.len());
    let mut prev = Point::new(5.0, 5.0);
    for (mark, p) in marks.iter().zip(&samples) {
        let Mark::Pen(seg) = mark else {
            panic!("expected pen segment");
        };
        assert_eq!((seg.from, seg.to), (prev, *p));
        prev = *p;
    }
}

#[test]
fn clear_after_commits_restores_background() {
    let source = gradient(90, 70);
    let mut editor = Editor::new();
    editor.open_image(source.clone()).unwrap();
    for tool in Tool::ALL {
        editor.update(EditorMsg::SelectTool(tool));
        editor.update(EditorMsg::down(10.0, 10.0));
        editor.update(EditorMsg::moved(40.0, 30.0));
        editor.update(EditorMsg::moved(70.0, 60.0));
        editor.update(EditorMsg::up(70.0, 60.0));
    }
    assert!(!is_transparent(editor.session().unwrap().surfaces().committed()));

    editor.update(EditorMsg::Clear);
    let session = editor.session().unwrap();
    assert!(is_transparent(session.surfaces().committed()));
    assert!(session.marks().is_empty());
    assert_eq!(session.surfaces().background(), &source);
    assert_eq!(session.visible_image(), source);
    assert_eq!(editor.close(true), Some(source));
}

#[test]
fn discarding_a_reopened_result_changes_nothing() {
    let mut host = HostAdapter::new();
    host.set_screenshot(SourceImage::from_input(&{
        let mut png = Vec::new();
        image::DynamicImage::ImageRgba8(gradient(50, 40))
            .write_to(&mut std::io::Cursor::new(&mut png), image::ImageFormat::Png)
            .unwrap();
        png
    })
    .unwrap());

    host.open_editor().unwrap();
    let outcome = host.replay([
        EditorMsg::SelectTool(Tool::Rectangle),
        EditorMsg::down(5.0, 5.0),
        EditorMsg::up(45.0, 35.0),
        EditorMsg::Done,
    ]);
    assert_eq!(outcome, Some(EditorOutcome::Saved));
    let result = host.screenshot().unwrap().clone();
    assert_ne!(result.rgba, gradient(50, 40));

    host.open_editor().unwrap();
    let outcome = host.replay([
        EditorMsg::SelectTool(Tool::Pen),
        EditorMsg::down(1.0, 1.0),
        EditorMsg::moved(49.0, 39.0),
        EditorMsg::up(49.0, 39.0),
        EditorMsg::Cancel,
    ]);
    assert_eq!(outcome, Some(EditorOutcome::Discarded));
    assert_eq!(host.screenshot(), Some(&result));
}
