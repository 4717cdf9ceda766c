use crate::app::App;
use crate::layout::{Layout, BOX_HEIGHT};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    app.resize(term_width, term_height);

    execute!(stdout, Hide)?;
    execute!(stdout, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    let layout = app.layout();
    render_header(stdout, app, &layout, term_width)?;
    render_boxes(stdout, app, &layout)?;
    render_labels(stdout, app, &layout)?;
    render_info(stdout, app, &layout, term_width)?;
    render_controls(stdout, app, &layout, term_width)?;

    if let Some(ref msg) = app.message {
        print_centered(stdout, msg, layout.message_y, term_width, app.theme.key)?;
    }

    if app.confetti.is_active() {
        render_confetti(stdout, app, term_width, term_height)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn print_centered(
    stdout: &mut io::Stdout,
    text: &str,
    y: u16,
    term_width: u16,
    color: Color,
) -> io::Result<()> {
    let len = text.chars().count() as u16;
    let x = term_width.saturating_sub(len) / 2;
    execute!(stdout, MoveTo(x, y), SetForegroundColor(color), Print(text))
}

fn render_header(stdout: &mut io::Stdout, app: &App, layout: &Layout, term_width: u16) -> io::Result<()> {
    print_centered(stdout, "Bubble Sort", layout.title_y, term_width, app.theme.title)?;
    print_centered(
        stdout,
        "Select two boxes to swap them.",
        layout.title_y + 1,
        term_width,
        app.theme.info,
    )
}

fn render_boxes(stdout: &mut io::Stdout, app: &App, layout: &Layout) -> io::Result<()> {
    let theme = &app.theme;
    let width = layout.box_width as usize;
    let inner = width.saturating_sub(2);

    // Resting boxes first so sliding ones are drawn on top
    let mut order: Vec<usize> = (0..app.board.len()).collect();
    order.sort_by_key(|&slot| app.board.draw_slot(slot).fract() != 0.0);

    for slot in order {
        if !layout.shows(app.board.draw_slot(slot)) {
            continue;
        }
        let view = &app.board.boxes()[slot];
        let x = layout.slot_x(app.board.draw_slot(slot));
        let fill = app.board.fill(slot, theme);
        let label = format!("{:^inner$}", view.value, inner = inner);

        execute!(stdout, SetBackgroundColor(fill), SetForegroundColor(theme.border))?;
        execute!(
            stdout,
            MoveTo(x, layout.boxes_y),
            Print(format!("┌{}┐", "─".repeat(inner)))
        )?;
        execute!(
            stdout,
            MoveTo(x, layout.boxes_y + 1),
            Print("│"),
            SetForegroundColor(theme.box_text),
            Print(label),
            SetForegroundColor(theme.border),
            Print("│")
        )?;
        execute!(
            stdout,
            MoveTo(x, layout.boxes_y + BOX_HEIGHT - 1),
            Print(format!("└{}┘", "─".repeat(inner)))
        )?;
    }

    execute!(stdout, SetBackgroundColor(theme.bg), SetForegroundColor(theme.key))?;
    let mid = layout.boxes_y + 1;
    if layout.hidden_left() {
        execute!(stdout, MoveTo(layout.boxes_x.saturating_sub(2), mid), Print("◀"))?;
    }
    if layout.hidden_right() {
        execute!(stdout, MoveTo(layout.boxes_x + layout.row_width() + 1, mid), Print("▶"))?;
    }
    Ok(())
}

/// Position numbers under the boxes, with the keyboard cursor marked
fn render_labels(stdout: &mut io::Stdout, app: &App, layout: &Layout) -> io::Result<()> {
    let theme = &app.theme;
    let width = layout.box_width as usize;

    for slot in layout.visible_slots() {
        let x = layout.slot_x(slot as f32);
        let (text, color) = if slot == app.cursor {
            (format!("^{}", slot + 1), theme.key)
        } else {
            ((slot + 1).to_string(), theme.info)
        };
        execute!(
            stdout,
            MoveTo(x, layout.labels_y),
            SetForegroundColor(color),
            Print(format!("{:^width$}", text, width = width))
        )?;
    }
    Ok(())
}

fn render_info(stdout: &mut io::Stdout, app: &App, layout: &Layout, term_width: u16) -> io::Result<()> {
    let puzzle = &app.puzzle;
    let text = if puzzle.solved_notified() || (puzzle.is_solved() && !puzzle.solve_pending()) {
        format!(
            "Sorted in {} swaps with {} mistakes!",
            puzzle.swaps_made(),
            puzzle.mismatches()
        )
    } else {
        format!(
            "Swaps left: {}   Swaps made: {}   Mistakes: {}",
            puzzle.remaining_swaps(),
            puzzle.swaps_made(),
            puzzle.mismatches()
        )
    };
    let color = if puzzle.solved_notified() {
        app.theme.box_success
    } else {
        app.theme.fg
    };
    print_centered(stdout, &text, layout.info_y, term_width, color)
}

fn render_controls(stdout: &mut io::Stdout, app: &App, layout: &Layout, term_width: u16) -> io::Result<()> {
    let theme = &app.theme;
    let controls = [
        ("click/1-9", "select"),
        ("←→ space", "cursor"),
        ("?", "hint"),
        ("n", "new"),
        ("t", "theme"),
        ("q", "quit"),
    ];
    let total: usize = controls
        .iter()
        .map(|(k, d)| k.chars().count() + d.chars().count() + 3)
        .sum();
    let x = term_width.saturating_sub(total as u16) / 2;

    execute!(stdout, MoveTo(x, layout.controls_y))?;
    for (key, desc) in controls {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}  ", desc))
        )?;
    }
    Ok(())
}

fn render_confetti(stdout: &mut io::Stdout, app: &App, term_width: u16, term_height: u16) -> io::Result<()> {
    for p in app.confetti.particles() {
        if p.is_visible(term_width, term_height) {
            execute!(
                stdout,
                MoveTo(p.x as u16, p.y as u16),
                SetForegroundColor(p.color),
                Print(p.char)
            )?;
        }
    }
    Ok(())
}
