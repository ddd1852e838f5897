//! Terminal rendering of the particle field.

use inkfall_core::ColorTheme;
use inkfall_fonts::is_wide;
use ratatui::{buffer::Buffer, layout::Rect, style::Style, widgets::Widget};

use crate::color::particle_color;
use crate::particle::Particle;

/// Widget that draws particles into terminal cells.
///
/// Each cell covers `cell_width x cell_height` logical pixels of the
/// animation surface. Particles outside the area are skipped, so pointer
/// kicks or spawn positions above the surface never touch neighbouring
/// widgets.
#[derive(Debug, Clone, Copy)]
pub struct ParticleCanvas<'a> {
    particles: &'a [Particle],
    cell_width: f32,
    cell_height: f32,
    theme: ColorTheme,
    layout_offset: f32,
}

impl<'a> ParticleCanvas<'a> {
    pub fn new(particles: &'a [Particle], cell_width: f32, cell_height: f32) -> Self {
        Self {
            particles,
            cell_width: cell_width.max(1.0),
            cell_height: cell_height.max(1.0),
            theme: ColorTheme::default(),
            layout_offset: 0.0,
        }
    }

    pub fn theme(mut self, theme: ColorTheme) -> Self {
        self.theme = theme;
        self
    }

    /// Current layout offset, used to measure how far particles are from home.
    pub fn layout_offset(mut self, offset: f32) -> Self {
        self.layout_offset = offset;
        self
    }

    /// Cell holding the pixel `(x, y)`, relative to the widget's top-left.
    fn cell_of(&self, x: f32, y: f32, wide: bool) -> Option<(u16, u16)> {
        // Wide glyphs span two cells; centre them on the particle
        let col = x / self.cell_width - if wide { 0.5 } else { 0.0 };
        let row = y / self.cell_height;
        if !(col >= 0.0 && row >= 0.0) || col >= u16::MAX as f32 || row >= u16::MAX as f32 {
            return None;
        }
        Some((col.floor() as u16, row.floor() as u16))
    }
}

impl Widget for ParticleCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.intersection(buf.area);
        let mut utf8 = [0u8; 4];
        for p in self.particles {
            let (x, y) = p.position();
            let glyph = p.glyph();
            let Some((col, row)) = self.cell_of(x, y, is_wide(glyph)) else {
                continue;
            };
            if col >= area.width || row >= area.height {
                continue;
            }
            let style = Style::new().fg(particle_color(self.theme, p.displacement(self.layout_offset)));
            let remaining = (area.width - col) as usize;
            buf.set_stringn(
                area.x + col,
                area.y + row,
                &*glyph.encode_utf8(&mut utf8),
                remaining,
                style,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::Motion;
    use ratatui::style::Color;

    fn particle_at(x: f32, y: f32, glyph: char) -> Particle {
        let motion = Motion {
            sway_phase: 0.0,
            sway_speed: 0.02,
            fall_speed: 2.0,
        };
        Particle::new((x, y), (x, y), glyph, motion)
    }

    #[test]
    fn test_particles_map_to_cells() {
        let particles = vec![particle_at(20.0, 40.0, 'x'), particle_at(0.0, 0.0, 'y')];
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&particles, 8.0, 16.0)
            .theme(ColorTheme::Cyan)
            .render(area, &mut buf);

        assert_eq!(buf[(2, 2)].symbol(), "x");
        assert_eq!(buf[(2, 2)].fg, Color::Cyan);
        assert_eq!(buf[(0, 0)].symbol(), "y");
        assert_eq!(buf[(5, 4)].symbol(), " ");
    }

    #[test]
    fn test_offscreen_particles_are_skipped() {
        let particles = vec![
            particle_at(-5.0, 10.0, 'a'),
            particle_at(10.0, -300.0, 'b'),
            particle_at(800.0, 10.0, 'c'),
            particle_at(f32::NAN, 10.0, 'd'),
        ];
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&particles, 8.0, 16.0).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn test_wide_glyph_is_centred_and_clipped() {
        let particles = vec![particle_at(24.0, 0.0, '글'), particle_at(79.0, 0.0, '자')];
        let area = Rect::new(0, 0, 10, 1);
        let mut buf = Buffer::empty(area);
        ParticleCanvas::new(&particles, 8.0, 16.0).render(area, &mut buf);
        // 24px is cell 3; the two-cell glyph starts one half cell earlier
        assert_eq!(buf[(2, 0)].symbol(), "글");
        // A wide glyph starting in the last column does not fit
        assert_eq!(buf[(9, 0)].symbol(), " ");
    }

    #[test]
    fn test_render_respects_area_origin() {
        let particles = vec![particle_at(8.0, 16.0, 'z')];
        let mut buf = Buffer::empty(Rect::new(0, 0, 6, 4));
        ParticleCanvas::new(&particles, 8.0, 16.0).render(Rect::new(2, 1, 4, 3), &mut buf);
        assert_eq!(buf[(3, 2)].symbol(), "z");
    }
}
