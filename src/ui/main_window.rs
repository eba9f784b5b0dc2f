use fltk::{
    app::Sender,
    button::Button,
    enums::{Align, Color, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

use crate::app::domain::messages::{ControlId, Message};

pub const TOOLBAR_HEIGHT: i32 = 40;
pub const STATUS_HEIGHT: i32 = 26;

const SAMPLE_CONTENT: &str = "EduAcessível\n\n\
Cursos online pensados para todas as pessoas.\n\n\
Use a barra de acessibilidade acima ou os atalhos Alt + 1 a Alt + 7 para ajustar \
o tamanho da fonte, o tema, o alto contraste e o espaçamento de leitura. \
Alt + 0 leva ao conteúdo principal.";

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub toolbar: Flex,
    pub controls: Vec<(ControlId, Button)>,
    pub content: TextDisplay,
    /// Mirrors the announcement live region; FLTK has no live-region API.
    pub status: Frame,
}

fn control_label(id: ControlId) -> &'static str {
    match id {
        ControlId::FontIncrease => "A+",
        ControlId::FontDecrease => "A-",
        ControlId::FontReset => "A",
        ControlId::ThemeToggle => "\u{2600}",
        ControlId::ContrastToggle => "\u{25d0}",
        ControlId::SpacingToggle => "\u{2194}",
        ControlId::DyslexiaToggle => "Aa",
    }
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "EduAcess\u{ed}vel");
    wind.set_xclass("EduAcessivel");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let mut toolbar = Flex::default();
    toolbar.set_type(FlexType::Row);
    let mut controls = Vec::with_capacity(ControlId::ALL.len());
    for id in ControlId::ALL {
        let mut button = Button::default().with_label(control_label(id));
        button.set_tooltip(id.label());
        button.set_callback({
            let s = *sender;
            move |_| s.send(id.message())
        });
        controls.push((id, button));
    }
    toolbar.end();
    flex.fixed(&toolbar, TOOLBAR_HEIGHT);

    let mut content = TextDisplay::default();
    let mut buffer = TextBuffer::default();
    buffer.set_text(SAMPLE_CONTENT);
    content.set_buffer(buffer);
    content.wrap_mode(WrapMode::AtBounds, 0);

    let mut status = Frame::default();
    status.set_frame(FrameType::FlatBox);
    status.set_align(Align::Left | Align::Inside);
    status.set_color(Color::from_rgb(240, 240, 240));
    flex.fixed(&status, STATUS_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        toolbar,
        controls,
        content,
        status,
    }
}
