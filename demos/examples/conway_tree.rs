// Copyright 2025 the Carpinus Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walk-through of an interactive diagram.
//!
//! Loads an error-context tree from JSON, lays it out, then drives the diagram the
//! way a host would: fit to view, collapse a context with Ctrl+click, zoom with the
//! wheel, pan with a drag, and export. Painting goes to a recording backend whose
//! display list is summarized on stdout.
//!
//! Run:
//! - `cargo run -p carpinus_demos --example conway_tree`
//! - `RUST_LOG=carpinus_scene=trace cargo run -p carpinus_demos --example conway_tree`

use std::cell::Cell;
use std::error::Error;
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use carpinus_layout::{LayoutConfig, LayoutEngine, MonospaceMeasurer, Point, Size, SourceNode};
use carpinus_scene::render::{DrawCommand, RecordingBackend};
use carpinus_scene::{
    Diagram, ExportPlan, InputConfig, Modifiers, PointerButton, PointerEvent, Surface,
};
use carpinus_viewport::ViewportConfig;
use tracing_subscriber::EnvFilter;

const SOURCE: &str = include_str!("../data/conway.json");

/// A fixed-size canvas that records what is painted on it.
struct HeadlessCanvas {
    size: Size,
    backend: RecordingBackend,
}

impl Surface for HeadlessCanvas {
    type Backend = RecordingBackend;

    fn size(&self) -> Size {
        self.size
    }

    fn backend(&mut self) -> Option<&mut RecordingBackend> {
        Some(&mut self.backend)
    }
}

fn summarize(title: &str, commands: &[DrawCommand]) {
    let mut rects = 0;
    let mut lines = 0;
    let mut texts = 0;
    for command in commands {
        match command {
            DrawCommand::FillRect { .. } => rects += 1,
            DrawCommand::Polyline { .. } => lines += 1,
            DrawCommand::FillText { .. } => texts += 1,
            DrawCommand::Clear(_) | DrawCommand::SetTransform(_) => {}
        }
    }
    println!("{title}: {rects} rects, {lines} connectors, {texts} text runs");
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let source: SourceNode = serde_json::from_str(SOURCE)?;
    let engine = LayoutEngine::new(LayoutConfig::default(), MonospaceMeasurer::default())?;
    let canvas = HeadlessCanvas {
        size: Size::new(1280.0, 720.0),
        backend: RecordingBackend::new(),
    };
    let mut diagram = Diagram::new(
        engine,
        ViewportConfig::default(),
        InputConfig::default(),
        canvas,
    )?;

    let frame_requests = Rc::new(Cell::new(0_usize));
    let requests = Rc::clone(&frame_requests);
    diagram.set_frame_scheduler(move || requests.set(requests.get() + 1));
    diagram.on_draw(|event| {
        tracing::info!(
            cause = ?event.cause,
            revision = event.revision,
            scale = event.viewport.scale,
            "draw"
        );
    });

    diagram.create(&source);
    let size = diagram.scheme_size();
    println!(
        "{} nodes laid out in {}x{}",
        source.node_count(),
        size.width,
        size.height
    );

    diagram.to_center();
    diagram.frame()?;
    summarize("initial frame", diagram.surface().backend.commands());

    // Ctrl+click the "Acquisition" context to hide its subtree.
    let target = diagram
        .state()
        .scheme()
        .root()
        .and_then(|root| root.breadth_first().find(|n| n.label == "Acquisition"))
        .map(|node| node.bounds().center());
    if let Some(scene_point) = target {
        let screen_point = diagram.state().viewport().scene_to_screen(scene_point);
        let response = diagram.handle_input(PointerEvent::Down {
            position: screen_point,
            button: PointerButton::Primary,
            modifiers: Modifiers::CTRL,
        });
        let size = diagram.scheme_size();
        println!(
            "toggled: {}, scheme now {}x{}",
            response.toggled, size.width, size.height
        );
    }

    // Zoom in three wheel notches, then pan with a short drag.
    let cursor = Point::new(640.0, 360.0);
    for _ in 0..3 {
        diagram.handle_input(PointerEvent::Wheel {
            position: cursor,
            delta_y: -100.0,
            modifiers: Modifiers::empty(),
        });
    }
    diagram.handle_input(PointerEvent::Down {
        position: cursor,
        button: PointerButton::Primary,
        modifiers: Modifiers::empty(),
    });
    diagram.handle_input(PointerEvent::Move {
        position: Point::new(600.0, 340.0),
    });
    diagram.handle_input(PointerEvent::Up {
        position: Point::new(600.0, 340.0),
    });
    println!(
        "frame requests so far: {}, scale {:.3}",
        frame_requests.get(),
        diagram.state().viewport().scale()
    );
    diagram.frame()?;
    summarize("after interaction", diagram.surface().backend.commands());

    let plan = ExportPlan::default();
    let mut export = RecordingBackend::new();
    let surface = diagram.export(&plan, &mut export)?;
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    println!(
        "export {} at {}x{}",
        plan.file_name(millis),
        surface.width,
        surface.height
    );
    summarize("export", export.commands());

    diagram.destroy();
    Ok(())
}
