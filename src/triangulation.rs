use log::debug;
use num_traits::real::Real;

#[cfg(feature = "debugging")]
use std::fmt;

#[cfg(feature = "debugging")]
use crate::debug;
use crate::{Point2D, TriangleWinding, TriangulationOptions, diagonals::{SweepDirection, plan_diagonals}, errors::{InvalidPolygon, TriangulationError}, math::signed_area, monotone::triangulate_monotone, ring::PolygonData, split::split_polygon};

/// Decomposes one outline into triangles: normalize, sweep down, sweep up, triangulate each monotone piece
pub(crate) struct TriangulationState<C: Real> {
    /// The outline, reversed if needed so that it runs counterclockwise
    points: Vec<Point2D<C>>,
    /// `true` if `points` is the caller's outline reversed
    flipped: bool,
    epsilon: C,
    /// Rings of (normalized) input indices produced by the latest decomposition stage
    pieces: Vec<Vec<usize>>,
    /// Counterclockwise triangles of normalized input indices
    triangles: Vec<[usize; 3]>,
    #[cfg(feature = "debugging")]
    svg_context: Option<debug::svg::SvgContext>,
    #[cfg(feature = "debugging")]
    current_step: u32,
    #[cfg(feature = "debugging")]
    current_substep: u32,
}

impl<C: Real> TriangulationState<C> {
    /// Validates the outline and brings it into counterclockwise order
    pub fn new(mut points: Vec<Point2D<C>>, options: &TriangulationOptions) -> Result<Self, TriangulationError> {
        let n = points.len();
        if n < 3 {
            return Err(InvalidPolygon::NotEnoughVertices(n).into());
        }
        if let Some(index) = points.iter().position(|p| !p.is_finite()) {
            return Err(InvalidPolygon::NonFiniteVertex(index).into());
        }

        let area = signed_area(&points);
        let flipped = TriangleWinding::from_signed_area(area) == TriangleWinding::Clockwise;
        if flipped {
            points.reverse();
        }
        debug!("Triangulating {} vertices (signed area {:?}, flipped: {})", n, area.to_f64(), flipped);

        #[cfg(feature = "debugging")]
        let svg_context = debug::svg::SvgContext::from_env(&points);

        Ok(Self {
            points,
            flipped,
            epsilon: options.epsilon(),
            pieces: Vec::new(),
            triangles: Vec::with_capacity(n - 2),
            #[cfg(feature = "debugging")]
            svg_context,
            #[cfg(feature = "debugging")]
            current_step: 0,
            #[cfg(feature = "debugging")]
            current_substep: 0,
        })
    }

    /// Runs every stage, returning the triangles as indices into the caller's outline.
    ///
    /// Triangles wind like the caller's outline unless `winding` says otherwise.
    pub fn build(mut self, winding: Option<TriangleWinding>) -> Result<Vec<[usize; 3]>, TriangulationError> {
        if let Err(e) = self.decompose() {
            return Err(self.caller_error(e));
        }

        let n = self.points.len();
        let input_winding = if self.flipped { TriangleWinding::Clockwise } else { TriangleWinding::Counterclockwise };
        let reverse_triangles = winding.unwrap_or(input_winding) == TriangleWinding::Clockwise;
        let flipped = self.flipped;
        let caller_index = |i: usize| if flipped { n - 1 - i } else { i };

        let mut output = Vec::with_capacity(self.triangles.len());
        let map = |&[a, b, c]: &[usize; 3]| {
            let (a, b, c) = (caller_index(a), caller_index(b), caller_index(c));
            if reverse_triangles { [c, b, a] } else { [a, b, c] }
        };
        // A reversed outline also reverses the order the triangles are reported in
        if flipped {
            output.extend(self.triangles.iter().rev().map(map));
        } else {
            output.extend(self.triangles.iter().map(map));
        }
        Ok(output)
    }

    fn decompose(&mut self) -> Result<(), TriangulationError> {
        let n = self.points.len();
        let ring: Vec<usize> = (0..n).collect();

        let polygon = PolygonData::new(&self.points, &ring)?;
        let diagonals = plan_diagonals(&polygon, SweepDirection::Down, self.epsilon)?;
        let down_pieces = split_polygon(&polygon, &diagonals)?;
        debug!("Down sweep: {} diagonals, {} pieces", diagonals.len(), down_pieces.len());
        self.pieces = down_pieces;
        #[cfg(feature = "debugging")]
        {
            self.output_svg(debug::svg::SvgTriangulationStyle::pieces_only(), debug::svg::SvgOutputLevel::MajorSteps);
            self.advance_step();
        }

        let mut monotone_pieces = Vec::with_capacity(self.pieces.len());
        let mut up_diagonals = 0;
        for piece in self.pieces.iter() {
            let polygon = PolygonData::new(&self.points, piece)?;
            let diagonals = plan_diagonals(&polygon, SweepDirection::Up, self.epsilon)?;
            up_diagonals += diagonals.len();
            monotone_pieces.extend(split_polygon(&polygon, &diagonals)?);
        }
        debug!("Up sweep: {} diagonals, {} monotone pieces", up_diagonals, monotone_pieces.len());
        self.pieces = monotone_pieces;
        #[cfg(feature = "debugging")]
        {
            self.output_svg(debug::svg::SvgTriangulationStyle::pieces_only(), debug::svg::SvgOutputLevel::MajorSteps);
            self.advance_step();
        }

        for piece_index in 0..self.pieces.len() {
            let polygon = PolygonData::new(&self.points, &self.pieces[piece_index])?;
            triangulate_monotone(&polygon, &mut self.triangles)?;
            #[cfg(feature = "debugging")]
            self.output_svg(debug::svg::SvgTriangulationStyle::highlight_piece(piece_index), debug::svg::SvgOutputLevel::AllSteps);
        }
        debug!("Emitted {} triangles", self.triangles.len());

        #[cfg(feature = "debugging")]
        {
            self.advance_step();
            self.output_svg(debug::svg::SvgTriangulationStyle::default(), debug::svg::SvgOutputLevel::ResultOnly);
        }

        if self.triangles.len() != n - 2 {
            return Err(TriangulationError::internal(format!("Expected {} triangles, emitted {}", n - 2, self.triangles.len())));
        }
        Ok(())
    }

    /// Rewrites vertex indices carried by `e` from the normalized outline to the caller's
    fn caller_error(&self, e: TriangulationError) -> TriangulationError {
        if !self.flipped {
            return e;
        }
        let n = self.points.len();
        match e {
            TriangulationError::UnclassifiableVertex(i) => TriangulationError::UnclassifiableVertex(n - 1 - i),
            TriangulationError::NoLeftEdgeFound(i) => TriangulationError::NoLeftEdgeFound(n - 1 - i),
            e => e,
        }
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&mut self, style: debug::svg::SvgTriangulationStyle, level: debug::svg::SvgOutputLevel) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= level {
                // Make the directory for this step if this is the first svg
                if self.current_substep == 0 {
                    let path = svg_context.output_path.join(format!("{:03}", self.current_step));
                    if std::fs::create_dir_all(path).is_err() {
                        return;
                    }
                }

                let mut svg = debug::svg::SvgOutput::new(svg_context, style);
                let _ = svg.append_element(self, &());

                let path: std::path::PathBuf = format!("{:03}", self.current_step).into();
                let path = path.join(format!("{:03}.svg", self.current_substep));
                let _ = svg.save(path);

                self.current_substep += 1;
            }
        }
    }

    #[cfg(feature = "debugging")]
    fn advance_step(&mut self) {
        if let Some(svg_context) = &self.svg_context {
            if svg_context.output_level >= debug::svg::SvgOutputLevel::MajorSteps {
                let path = svg_context.output_path.join(format!("{:03}", self.current_step)).join("pieces.txt");
                if let Ok(f) = std::fs::File::create(path) {
                    use std::io::Write;
                    let mut w = std::io::BufWriter::new(&f);
                    for piece in self.pieces.iter() {
                        let _ = writeln!(w, "{:?}", piece);
                    }
                }

                self.current_step += 1;
                self.current_substep = 0;
            }
        }
    }
}

#[cfg(feature = "debugging")]
impl<C: Real> debug::svg::SvgElement<debug::svg::SvgTriangulationStyle, ()> for TriangulationState<C> {
    fn write_svg<'b>(&self, svg_output: &mut debug::svg::SvgOutput<'b, debug::svg::SvgTriangulationStyle>, _state: &()) -> fmt::Result {
        use svg_fmt::*;
        use fmt::Write;

        let outline: Vec<[f32; 2]> = self.points.iter().map(debug::svg::to_f32).collect();
        writeln!(svg_output, "{}",
            polygon(&outline)
                .stroke(Stroke::Color(rgb(255, 0, 255), svg_output.context.percent(0.3)))
        )?;

        if svg_output.style.show_triangles {
            for &[a, b, c] in self.triangles.iter() {
                let corners = [outline[a], outline[b], outline[c]];
                writeln!(svg_output, "{}",
                    polygon(&corners)
                        .stroke(Stroke::Color(black(), svg_output.context.percent(0.1)))
                        .open()
                        .stroke_opacity(0.5)
                )?;
            }
        }

        for (i, piece) in self.pieces.iter().enumerate() {
            let (color, width) = match svg_output.style.get_piece_style(i) {
                debug::svg::SvgElementStyle::Standard => (blue(), svg_output.context.percent(0.2)),
                debug::svg::SvgElementStyle::Highlight => (rgb(255, 126, 0), svg_output.context.percent(0.4)),
            };
            for (j, &from) in piece.iter().enumerate() {
                let to = piece[(j + 1) % piece.len()];
                writeln!(svg_output, "{}",
                    line_segment(outline[from][0], outline[from][1], outline[to][0], outline[to][1])
                        .color(color)
                        .width(width)
                )?;
            }
        }

        let r = svg_output.context.percent(0.5);
        for (i, &[x, y]) in outline.iter().enumerate() {
            writeln!(svg_output, "{}",
                debug::svg::circle(x, y, r)
                    .fill(Fill::Color(green()))
            )?;
            if svg_output.context.show_labels {
                let index = if self.flipped { outline.len() - 1 - i } else { i };
                writeln!(svg_output, "{}",
                    text(x, y, format!("{}", index))
                        .color(black())
                        .align(Align::Center)
                        .size(svg_output.context.percent(3.0))
                )?;
            }
        }
        Ok(())
    }
}
