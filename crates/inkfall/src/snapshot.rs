//! Headless rendering of a single frame.

use inkfall_config::Config;
use inkfall_fonts::is_wide;
use inkfall_particles::{Animator, ParticleCanvas};
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::app::{cell_to_pixel, load_font};
use crate::cli::SnapshotArgs;

/// Simulate `args.frames` frames and render the result into a buffer.
///
/// The sequence is started immediately; with a pointer it is started by the
/// pointer entering, as in the interactive app.
pub fn simulate(config: &Config, args: &SnapshotArgs) -> (Animator, Buffer) {
    let font = load_font(config);
    let mut animator = Animator::with_seed(config.animator_settings(), font, args.seed);

    let (cell_width, cell_height) = (config.cell_width as f32, config.cell_height as f32);
    let area = Rect::new(0, 0, args.width, args.height);
    animator.resize(area.width as f32 * cell_width, area.height as f32 * cell_height);

    match args
        .pointer
        .and_then(|(col, row)| cell_to_pixel(area, col, row, cell_width, cell_height))
    {
        Some((x, y)) => animator.pointer_enter(x, y),
        None => {
            animator.start();
        }
    }

    for frame in 1..=u64::from(args.frames) {
        animator.update(frame * config.frame_interval_ms);
    }

    let mut buf = Buffer::empty(area);
    ParticleCanvas::new(animator.particles(), cell_width, cell_height)
        .theme(config.color_theme)
        .layout_offset(animator.layout_offset())
        .render(area, &mut buf);
    (animator, buf)
}

/// Plain text lines of a buffer, trailing blanks trimmed.
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut line = String::new();
            let mut skip = false;
            for x in area.left()..area.right() {
                if skip {
                    // Second half of a wide glyph
                    skip = false;
                    continue;
                }
                let symbol = buf[(x, y)].symbol();
                skip = symbol.chars().next().is_some_and(is_wide);
                line.push_str(symbol);
            }
            line.trim_end().to_string()
        })
        .collect()
}

/// Run the snapshot command, printing the frame to stdout.
pub fn run(config: &Config, args: &SnapshotArgs) -> color_eyre::Result<()> {
    let (animator, buf) = simulate(config, args);
    tracing::info!(
        phase = %animator.phase(),
        particles = animator.particles().len(),
        frames = args.frames,
        "snapshot rendered"
    );
    for line in buffer_lines(&buf) {
        println!("{line}");
    }
    eprintln!(
        "{} particles, phase {} after {} frames",
        animator.particles().len(),
        animator.phase(),
        args.frames
    );
    Ok(())
}
