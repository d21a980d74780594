use crossterm::{cursor, execute, queue, style::Print, terminal};
use marginlife::Grid;
use std::io::{self, Write};

const ALIVE_GLYPH: char = 'X';
const DEAD_GLYPH: char = '.';

pub struct ConsoleRender {
    report: String,
    frame: String,
}
impl ConsoleRender {
    pub fn new() -> io::Result<Self> {
        execute!(
            io::stdout(),
            cursor::Hide,
            terminal::Clear(terminal::ClearType::All)
        )?;
        Ok(Self {
            report: String::new(),
            frame: String::new(),
        })
    }

    pub fn render(&mut self, grid: &Grid) -> io::Result<()> {
        self.frame.clear();
        for row in grid.visible_window() {
            self.frame
                .extend(row.map(|alive| if alive { ALIVE_GLYPH } else { DEAD_GLYPH }));
            self.frame.push('\n');
        }
        self.frame.push_str(&self.report);
        self.frame.push('\n');

        let mut stdout = io::stdout();
        queue!(
            stdout,
            terminal::Clear(terminal::ClearType::All),
            cursor::MoveTo(0, 0),
            Print(&self.frame)
        )?;
        stdout.flush()
    }

    pub fn set_report(&mut self, report: String) {
        self.report = report;
    }
}
impl Drop for ConsoleRender {
    fn drop(&mut self) {
        // the last generation stays on screen, only the cursor comes back
        execute!(io::stdout(), cursor::Show).expect("enable cursor");
    }
}
