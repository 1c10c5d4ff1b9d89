/// Character-cell rasterizer for terminal rendering
use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};
use spin3d_core::{edges_from, EdgeKind, Figure, Rgb, Segment, Vertex, Viewport};
use std::io::Write;

use crate::config::Components;

/// Character used for filled areas (faces and markers).
const SOLID: char = '█';
const EDGE_CHAR: char = '*';
const INNER_CHAR: char = '.';
const EDGE_COLOR: Color = Color::White;

/// Solid markers are three stacked discs shaded by their height.
const MARKER_BASE: Rgb = Rgb::new(0xb0, 0x00, 0x00);
const MARKER_LAYERS: [Rgb; 2] = [Rgb::new(0xc7, 0x00, 0x00), Rgb::new(0xe6, 0x00, 0x00)];
const VERTEX_MARKER_RADIUS: f64 = 5.0;
const CENTER_MARKER_RADIUS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Cell {
    character: char,
    color: Color,
}

const BLANK: Cell = Cell {
    character: ' ',
    color: Color::Reset,
};

/// Terminal canvas painted back to front; later shapes cover earlier ones.
pub struct Canvas {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![BLANK; width * height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn resize(&mut self, width: usize, height: usize) {
        self.width = width;
        self.height = height;
        self.cells = vec![BLANK; width * height];
    }

    pub fn clear(&mut self) {
        self.cells.fill(BLANK);
    }

    /// Character at a cell, `None` outside the canvas.
    pub fn char_at(&self, x: usize, y: usize) -> Option<char> {
        self.cell(x, y).map(|cell| cell.character)
    }

    pub fn color_at(&self, x: usize, y: usize) -> Option<Color> {
        self.cell(x, y).map(|cell| cell.color)
    }

    fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        if x < self.width && y < self.height {
            self.cells.get(y * self.width + x)
        } else {
            None
        }
    }

    fn plot(&mut self, x: i64, y: i64, character: char, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        self.cells[y as usize * self.width + x as usize] = Cell { character, color };
    }

    /// Fill the cells whose centers lie inside the polygon (even-odd rule).
    pub fn fill_polygon(&mut self, points: &[(f64, f64)], color: Color) {
        if points.len() < 3 {
            return;
        }

        let min_y = points.iter().map(|p| p.1).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max);
        let min_x = points.iter().map(|p| p.0).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.0).fold(f64::NEG_INFINITY, f64::max);

        let min_y = (min_y.floor() as i64).max(0);
        let max_y = (max_y.ceil() as i64).min(self.height as i64 - 1);
        let min_x = (min_x.floor() as i64).max(0);
        let max_x = (max_x.ceil() as i64).min(self.width as i64 - 1);

        for y in min_y..=max_y {
            for x in min_x..=max_x {
                if contains(points, (x as f64 + 0.5, y as f64 + 0.5)) {
                    self.plot(x, y, SOLID, color);
                }
            }
        }
    }

    /// Straight line between two canvas points.
    pub fn line(&mut self, from: (f64, f64), to: (f64, f64), character: char, color: Color) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let steps = dx.abs().max(dy.abs()).ceil().max(1.0) as i64;
        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = (from.0 + dx * t).floor() as i64;
            let y = (from.1 + dy * t).floor() as i64;
            self.plot(x, y, character, color);
        }
    }

    /// Filled ellipse inside a `(left, top, right, bottom)` box. The cell
    /// holding the center is always painted.
    pub fn fill_oval(&mut self, (left, top, right, bottom): (f64, f64, f64, f64), color: Color) {
        let (cx, cy) = ((left + right) / 2.0, (top + bottom) / 2.0);
        let (rx, ry) = ((right - left) / 2.0, (bottom - top) / 2.0);

        self.plot(cx.floor() as i64, cy.floor() as i64, SOLID, color);
        if rx <= 0.0 || ry <= 0.0 {
            return;
        }

        for y in (top.floor() as i64)..=(bottom.ceil() as i64) {
            for x in (left.floor() as i64)..=(right.ceil() as i64) {
                let nx = (x as f64 + 0.5 - cx) / rx;
                let ny = (y as f64 + 0.5 - cy) / ry;
                if nx * nx + ny * ny <= 1.0 {
                    self.plot(x, y, SOLID, color);
                }
            }
        }
    }

    /// Draw `figure` with the enabled components, back to front.
    ///
    /// Without faces: vertices, edges, center, inner edges. With faces: the
    /// faces turned away first, then edges, center and inner edges, then the
    /// faces towards the viewer and finally the vertices on top.
    pub fn render_figure(
        &mut self,
        figure: &Figure,
        components: &Components,
        viewport: &Viewport,
    ) -> spin3d_core::Result<()> {
        if !components.face {
            if components.vertex {
                self.draw_vertices(figure, components, viewport);
            }
            self.draw_middle_layer(figure, components, viewport)?;
            return Ok(());
        }

        self.draw_faces(figure, viewport, false);
        self.draw_middle_layer(figure, components, viewport)?;
        self.draw_faces(figure, viewport, true);
        if components.vertex {
            self.draw_vertices(figure, components, viewport);
        }
        Ok(())
    }

    fn draw_middle_layer(
        &mut self,
        figure: &Figure,
        components: &Components,
        viewport: &Viewport,
    ) -> spin3d_core::Result<()> {
        if components.edge {
            let marker = components.vertex.then_some(VERTEX_MARKER_RADIUS);
            for vertex in figure {
                let segments = edges_from(figure, vertex, EdgeKind::Full, marker)?;
                self.draw_segments(&segments, viewport, EDGE_CHAR);
            }
        }
        if components.center {
            self.draw_solid_vertex(&Vertex::origin(), CENTER_MARKER_RADIUS, viewport);
        }
        if components.inner {
            let marker = components.center.then_some(CENTER_MARKER_RADIUS);
            let segments = edges_from(figure, &Vertex::origin(), EdgeKind::Inner, marker)?;
            self.draw_segments(&segments, viewport, INNER_CHAR);
        }
        Ok(())
    }

    fn draw_faces(&mut self, figure: &Figure, viewport: &Viewport, visible: bool) {
        for face in figure.faces() {
            if face.always_invisible() || face.visible() != visible {
                continue;
            }
            let outline = viewport.polygon(figure.face_vertices(face));
            self.fill_polygon(&outline, to_color(face.color()));
        }
    }

    fn draw_vertices(&mut self, figure: &Figure, components: &Components, viewport: &Viewport) {
        let visible = figure.visible_vertices(components.face);
        for (vertex, _) in figure.iter().zip(visible).filter(|(_, shown)| *shown) {
            self.draw_solid_vertex(vertex, VERTEX_MARKER_RADIUS, viewport);
        }
    }

    fn draw_segments(&mut self, segments: &[Segment], viewport: &Viewport, character: char) {
        for segment in segments {
            self.line(
                viewport.project(&segment.start),
                viewport.project(&segment.end),
                character,
                EDGE_COLOR,
            );
        }
    }

    /// Marker of radius `r` built from a base disc and two smaller discs
    /// raised towards the top.
    fn draw_solid_vertex(&mut self, vertex: &Vertex, r: f64, viewport: &Viewport) {
        let depth = vertex.z();
        self.fill_oval(viewport.circle(vertex, r), to_color(MARKER_BASE.shade(depth)));

        let offsets = [(r / 5.0).round(), (r / 2.5).trunc()];
        for (offset, color) in offsets.into_iter().zip(MARKER_LAYERS) {
            let center = *vertex + Vertex::new(0.0, 0.0, offset);
            self.fill_oval(viewport.circle(&center, r - offset), to_color(color.shade(depth)));
        }
    }

    pub fn draw<W: Write>(&self, writer: &mut W) -> std::io::Result<()> {
        for y in 0..self.height {
            for x in 0..self.width {
                let cell = self.cells[y * self.width + x];
                writer.queue(SetForegroundColor(cell.color))?;
                writer.queue(Print(cell.character))?;
            }
            if y + 1 < self.height {
                writer.queue(Print("\r\n"))?;
            }
        }
        writer.queue(ResetColor)?;
        Ok(())
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Even-odd point in polygon test.
fn contains(points: &[(f64, f64)], (px, py): (f64, f64)) -> bool {
    let mut inside = false;
    let mut j = points.len() - 1;
    for i in 0..points.len() {
        let (xi, yi) = points[i];
        let (xj, yj) = points[j];
        if (yi > py) != (yj > py) && px < (xj - xi) * (py - yi) / (yj - yi) + xi {
            inside = !inside;
        }
        j = i;
    }
    inside
}
