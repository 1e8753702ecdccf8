use std::fs::File;
use std::io::{self, Write};

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEventKind};
use crossterm::{cursor, execute, terminal};
use simplelog::{Config, LevelFilter, WriteLogger};
use tablewrap::{render_table, Cell, Options, Reflow, Row, Table};

fn sample_table() -> Table {
    Table::new()
        .id("instances")
        .row(
            Row::new()
                .cell(Cell::new("name"))
                .cell(Cell::new("region"))
                .cell(Cell::new("cpu"))
                .cell(Cell::new("mem"))
                .cell(Cell::new("disk"))
                .cell(Cell::new("status")),
        )
        .row(
            Row::new()
                .cell(Cell::new("api-1"))
                .cell(Cell::new("eu-west"))
                .cell(Cell::new("42%"))
                .cell(Cell::new("1.2G"))
                .cell(Cell::new("80G"))
                .cell(Cell::new("running")),
        )
        .row(
            Row::new()
                .cell(Cell::new("api-2"))
                .cell(Cell::new("eu-west"))
                .cell(Cell::new("17%"))
                .cell(Cell::new("0.9G"))
                .cell(Cell::new("80G"))
                .cell(Cell::new("running")),
        )
        .row(
            Row::new()
                .cell(Cell::new("worker-1"))
                .cell(Cell::new("us-east"))
                .cell(Cell::new("93%"))
                .cell(Cell::new("3.4G"))
                .cell(Cell::new("120G"))
                .cell(Cell::new("degraded")),
        )
}

fn main() -> io::Result<()> {
    // Set up file logging (stdout belongs to the raw-mode UI)
    let log_file = File::create("demo.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    // Wrap when the terminal is narrower than 60 columns; resize the
    // terminal across that boundary to watch the table reflow.
    let options = Options::new().breakpoint(60);
    let mut reflow = Reflow::attach_to_viewport(vec![sample_table()], options)?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    execute!(stdout, terminal::EnterAlternateScreen, cursor::Hide)?;

    let result = run(&mut stdout, &mut reflow);

    execute!(stdout, cursor::Show, terminal::LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;
    result
}

fn run(stdout: &mut io::Stdout, reflow: &mut Reflow) -> io::Result<()> {
    loop {
        draw(stdout, reflow)?;

        let event = crossterm::event::read()?;
        if let CrosstermEvent::Key(key) = &event {
            if key.kind == KeyEventKind::Press
                && (key.code == KeyCode::Char('q') || key.code == KeyCode::Esc)
            {
                return Ok(());
            }
        }
        reflow.process_events(&[event]);
    }
}

fn draw(stdout: &mut io::Stdout, reflow: &Reflow) -> io::Result<()> {
    execute!(
        stdout,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )?;

    let state = if reflow.is_wrapped() {
        "wrapped"
    } else {
        "unwrapped"
    };
    write!(
        stdout,
        "tablewrap demo - breakpoint {} - currently {} - q to quit\r\n\r\n",
        reflow.options().breakpoint,
        state
    )?;

    for table in reflow.tables() {
        for line in render_table(table) {
            write!(stdout, "{line}\r\n")?;
        }
        write!(stdout, "\r\n")?;
    }

    stdout.flush()
}
