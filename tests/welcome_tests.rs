//! Tests for the welcome element
//!
//! The start control must show its label verbatim and fire the start-call
//! trigger exactly once per activation.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use gauntlet::config::{AppConfig, ThemeMode};
use gauntlet::tui::Theme;
use gauntlet::tui::views::{WelcomeView, render_welcome};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer, style::Color};
use std::cell::Cell;

fn rows(buffer: &Buffer) -> Vec<String> {
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect())
        .collect()
}

fn render(start_button_text: &str, theme: &Theme) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            render_welcome(frame, area, start_button_text, "The Gauntlet", theme);
        })
        .unwrap();
    terminal.backend().buffer().clone()
}

#[test]
fn test_start_control_label_is_verbatim() {
    let theme = Theme::default();
    let buffer = render("Enter The Gauntlet", &theme);
    let rows = rows(&buffer);

    let button_row = rows
        .iter()
        .position(|row| row.contains("Enter The Gauntlet"))
        .expect("start control should be rendered");
    assert_eq!(rows[button_row].trim(), "Enter The Gauntlet");

    // No case transformation of the label
    assert!(!rows.iter().any(|row| row.contains("ENTER THE GAUNTLET")));
}

#[test]
fn test_start_control_uses_accent_background() {
    let theme = Theme::from_config(&AppConfig::default(), ThemeMode::Light);
    let buffer = render("Enter The Gauntlet", &theme);
    let width = buffer.area.width as usize;
    let rows = rows(&buffer);

    let y = rows
        .iter()
        .position(|row| row.contains("Enter The Gauntlet"))
        .unwrap();
    let x = rows[y].find("Enter").unwrap();
    let cell = &buffer.content[y * width + x];
    assert_eq!(cell.bg, Color::Rgb(0xe1, 0x1d, 0x48));
}

#[test]
fn test_welcome_content_order() {
    let buffer = render("Enter The Gauntlet", &Theme::default());
    let rows = rows(&buffer);
    let find = |needle: &str| rows.iter().position(|row| row.contains(needle)).unwrap();

    let emblem = find("( (o) )");
    let heading = find("The Gauntlet");
    let tagline = find("Pitch your startup idea. Survive the validation.");
    let button = find("Enter The Gauntlet");
    let attribution = find("Powered by LiveKit, Deepgram, Google Gemini, and Murf AI.");

    assert!(emblem < heading);
    assert!(heading < tagline);
    assert!(tagline < button);
    assert!(button < attribution);
    assert_eq!(attribution, rows.len() - 1);
}

#[test]
fn test_custom_label() {
    let buffer = render("Start Pitching", &Theme::default());
    assert!(rows(&buffer).iter().any(|row| row.trim() == "Start Pitching"));
}

#[test]
fn test_trigger_fires_once_per_activation() {
    let calls = Cell::new(0);
    let mut view = WelcomeView::new("Enter The Gauntlet", || calls.set(calls.get() + 1));
    assert_eq!(view.start_button_text(), "Enter The Gauntlet");

    view.activate();
    assert_eq!(calls.get(), 1);

    assert!(view.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)));
    assert_eq!(calls.get(), 2);

    assert!(!view.handle_key(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)));
    assert_eq!(calls.get(), 2);
}

#[test]
fn test_rendering_does_not_trigger() {
    let calls = Cell::new(0);
    let view = WelcomeView::new("Enter The Gauntlet", || calls.set(calls.get() + 1));

    let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
    let theme = Theme::default();
    for _ in 0..3 {
        terminal
            .draw(|frame| {
                let area = frame.area();
                view.render(frame, area, "The Gauntlet", &theme);
            })
            .unwrap();
    }
    assert_eq!(calls.get(), 0);
}
