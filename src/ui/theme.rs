use fltk::{
    enums::{Color, FrameType},
    prelude::*,
};

use super::main_window::MainWidgets;
use crate::app::domain::messages::ControlId;
use crate::app::domain::preferences::{BASE_FONT_PX, ThemeMode};
use crate::app::infrastructure::presentation::{BodyClass, Page};
use crate::app::services::announcer::ANNOUNCEMENT_REGION_ID;

struct Palette {
    background: Color,
    foreground: Color,
    toolbar: Color,
    active: Color,
    selection: Color,
}

fn palette(mode: ThemeMode) -> Palette {
    match mode {
        ThemeMode::Light => Palette {
            background: Color::White,
            foreground: Color::Black,
            toolbar: Color::from_rgb(240, 240, 240),
            active: Color::from_rgb(212, 175, 55),
            selection: Color::from_rgb(173, 216, 230),
        },
        ThemeMode::Dark => Palette {
            background: Color::from_rgb(30, 30, 30),
            foreground: Color::from_rgb(220, 220, 220),
            toolbar: Color::from_rgb(40, 40, 40),
            active: Color::from_rgb(139, 128, 0),
            selection: Color::from_rgb(70, 70, 100),
        },
        ThemeMode::HighContrast => Palette {
            background: Color::Black,
            foreground: Color::from_rgb(255, 255, 0),
            toolbar: Color::Black,
            active: Color::from_rgb(0, 255, 255),
            selection: Color::from_rgb(255, 255, 255),
        },
    }
}

/// Which theme the page projection shows.
fn shown_theme(page: &Page) -> ThemeMode {
    let classes = page.theme_classes();
    if classes.contains(&BodyClass::HighContrastTheme) {
        ThemeMode::HighContrast
    } else if classes.contains(&BodyClass::DarkTheme) {
        ThemeMode::Dark
    } else {
        ThemeMode::Light
    }
}

/// Render the page projection onto the FLTK widgets.
pub fn apply_page(widgets: &mut MainWidgets, page: &Page) {
    let colors = palette(shown_theme(page));
    let text_size = page.root_font_px().unwrap_or(BASE_FONT_PX).round() as i32;
    let spacing = page.classes().any(|c| c == BodyClass::IncreaseSpacing);

    widgets.wind.set_color(colors.background);
    widgets.flex.set_color(colors.background);
    widgets.toolbar.set_color(colors.toolbar);
    widgets.toolbar.set_pad(if spacing { 12 } else { 4 });
    widgets.flex.set_pad(if spacing { 10 } else { 2 });

    widgets.content.set_color(colors.background);
    widgets.content.set_text_color(colors.foreground);
    widgets.content.set_selection_color(colors.selection);
    widgets.content.set_text_size(text_size);

    for (id, button) in widgets.controls.iter_mut() {
        let active = page.is_control_active(*id).unwrap_or(false);
        button.set_frame(if active { FrameType::DownBox } else { FrameType::UpBox });
        button.set_color(if active { colors.active } else { colors.toolbar });
        button.set_label_color(colors.foreground);
        button.set_label_size(text_size);
    }
    if let Some(glyph) = page.theme_glyph() {
        if let Some((_, button)) = widgets
            .controls
            .iter_mut()
            .find(|(id, _)| *id == ControlId::ThemeToggle)
        {
            button.set_label(glyph);
        }
    }

    let announcement = page
        .live_region(ANNOUNCEMENT_REGION_ID)
        .map(|r| r.text.as_str())
        .unwrap_or("");
    widgets.status.set_label(announcement);
    widgets.status.set_color(colors.toolbar);
    widgets.status.set_label_color(colors.foreground);

    widgets.wind.redraw();
}

/// Set Windows title bar theme (Windows 10 build 1809+)
/// Must be called AFTER window.show() to have a valid HWND
#[cfg(target_os = "windows")]
pub fn set_windows_titlebar_theme(window: &fltk::window::Window, is_dark: bool) {
    use std::mem::size_of;
    use std::ptr::from_ref;
    use windows::Win32::Foundation::HWND;
    use windows::Win32::Graphics::Dwm::{DWMWINDOWATTRIBUTE, DwmSetWindowAttribute};

    unsafe {
        let hwnd = HWND(window.raw_handle() as *mut std::ffi::c_void);

        let on: i32 = if is_dark { 1 } else { 0 };

        // Try attribute 20 (Windows 11 / Windows 10 2004+)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(20), // DWMWA_USE_IMMERSIVE_DARK_MODE
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );

        // Also try attribute 19 (Windows 10 1809-1903)
        let _ = DwmSetWindowAttribute(
            hwnd,
            DWMWINDOWATTRIBUTE(19),
            from_ref(&on).cast(),
            size_of::<i32>() as u32,
        );
    }
}

/// Whether the window chrome should be dark for this projection.
pub fn wants_dark_chrome(page: &Page) -> bool {
    shown_theme(page) != ThemeMode::Light
}
