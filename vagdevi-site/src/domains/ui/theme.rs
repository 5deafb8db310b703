use iced::{
    Background, Border, Color, Shadow, Theme, Vector, theme,
    widget::{button, container, scrollable, text_editor, text_input},
};

/// Warm cream theme with saffron accents and espresso text
#[derive(Debug, Clone, Copy)]
pub struct VagdeviTheme;

impl VagdeviTheme {
    // Brand colors
    pub const BACKGROUND: Color = Color::from_rgb(0.992, 0.976, 0.949); // #FDF9F2
    pub const BACKGROUND_ALT: Color = Color::from_rgb(0.961, 0.925, 0.867); // #F5ECDD
    pub const SURFACE: Color = Color::from_rgb(1.0, 1.0, 1.0);
    pub const SAFFRON: Color = Color::from_rgb(0.878, 0.565, 0.118); // #E0901E
    pub const SAFFRON_HOVER: Color = Color::from_rgb(0.792, 0.478, 0.063);
    pub const GOLD: Color = Color::from_rgb(0.831, 0.686, 0.216); // #D4AF37
    pub const ESPRESSO: Color = Color::from_rgb(0.235, 0.157, 0.118); // #3C281E
    pub const CREAM: Color = Color::from_rgb(0.996, 0.949, 0.871);

    // Text colors
    pub const TEXT_HEADING: Color = Self::ESPRESSO;
    pub const TEXT_BODY: Color = Color::from_rgb(0.353, 0.306, 0.275); // #5A4E46
    pub const TEXT_MUTED: Color = Color::from_rgb(0.533, 0.494, 0.463);
    pub const TEXT_ON_DARK: Color = Color::from_rgba(1.0, 1.0, 1.0, 0.85);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.180, 0.545, 0.341); // #2E8B57
    pub const ERROR: Color = Color::from_rgb(0.780, 0.212, 0.212); // #C73636
    pub const ERROR_BG: Color = Color::from_rgb(0.996, 0.925, 0.925);

    pub const BORDER_COLOR: Color = Color::from_rgba(0.235, 0.157, 0.118, 0.12);
    pub const SHADOW: Color = Color::from_rgba(0.235, 0.157, 0.118, 0.12);
    pub const PLACEHOLDER: Color = Color::from_rgb(0.85, 0.80, 0.74);

    pub fn theme() -> Theme {
        let mut palette = theme::Palette::LIGHT;
        palette.background = Self::BACKGROUND;
        palette.text = Self::TEXT_BODY;
        palette.primary = Self::SAFFRON;
        palette.success = Self::SUCCESS;
        palette.danger = Self::ERROR;

        Theme::custom("Vagdevi Cream", palette)
    }
}

/// Darken a color by `amount` (0.0 to 1.0)
pub fn darken(color: Color, amount: f32) -> Color {
    let factor = 1.0 - amount.clamp(0.0, 1.0);
    Color::from_rgba(color.r * factor, color.g * factor, color.b * factor, color.a)
}

fn card_shadow(blur_radius: f32) -> Shadow {
    Shadow {
        color: VagdeviTheme::SHADOW,
        offset: Vector::new(0.0, 8.0),
        blur_radius,
    }
}

// Container styles using closures
#[derive(Debug, Clone, Copy)]
pub enum Container {
    Page,
    AltSection,
    DarkSection,
    Card,
    Chip,
    Placeholder,
    ErrorBanner,
    SuccessPanel,
    AccentRule,
    Footer,
    MobileMenu,
}

impl Container {
    pub fn style(&self) -> fn(&Theme) -> container::Style {
        match self {
            Container::Page => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_BODY),
                background: Some(Background::Color(VagdeviTheme::BACKGROUND)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::AltSection => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_BODY),
                background: Some(Background::Color(
                    VagdeviTheme::BACKGROUND_ALT,
                )),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::DarkSection => |_| container::Style {
                text_color: Some(Color::WHITE),
                background: Some(Background::Color(VagdeviTheme::ESPRESSO)),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Card => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_BODY),
                background: Some(Background::Color(VagdeviTheme::SURFACE)),
                border: Border {
                    color: VagdeviTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: card_shadow(24.0),
                snap: false,
            },
            Container::Chip => |_| container::Style {
                text_color: Some(VagdeviTheme::ESPRESSO),
                background: Some(Background::Color(
                    VagdeviTheme::BACKGROUND_ALT,
                )),
                border: Border {
                    color: VagdeviTheme::BACKGROUND_ALT,
                    width: 1.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Placeholder => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_MUTED),
                background: Some(Background::Color(VagdeviTheme::CREAM)),
                border: Border {
                    color: VagdeviTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::ErrorBanner => |_| container::Style {
                text_color: Some(VagdeviTheme::ERROR),
                background: Some(Background::Color(VagdeviTheme::ERROR_BG)),
                border: Border {
                    color: VagdeviTheme::ERROR,
                    width: 1.0,
                    radius: 12.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::SuccessPanel => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_HEADING),
                background: Some(Background::Color(VagdeviTheme::SURFACE)),
                border: Border {
                    color: VagdeviTheme::SUCCESS,
                    width: 1.0,
                    radius: 16.0.into(),
                },
                shadow: card_shadow(24.0),
                snap: false,
            },
            Container::AccentRule => |_| container::Style {
                text_color: None,
                background: Some(Background::Color(VagdeviTheme::GOLD)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 2.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Container::Footer => |_| container::Style {
                text_color: Some(VagdeviTheme::TEXT_ON_DARK),
                background: Some(Background::Color(darken(
                    VagdeviTheme::ESPRESSO,
                    0.3,
                ))),
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Container::MobileMenu => |_| container::Style {
                text_color: Some(VagdeviTheme::ESPRESSO),
                background: Some(Background::Color(VagdeviTheme::SURFACE)),
                border: Border {
                    color: VagdeviTheme::BORDER_COLOR,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                shadow: card_shadow(12.0),
                snap: false,
            },
        }
    }
}

/// Navbar background blended by its elevation (0.0 at the top of the page).
pub fn navbar_style(elevation: f32) -> impl Fn(&Theme) -> container::Style {
    move |_| {
        let background = crate::domains::ui::transitions::interpolate_color(
            Color {
                a: 0.0,
                ..VagdeviTheme::BACKGROUND
            },
            Color {
                a: 0.95,
                ..VagdeviTheme::SURFACE
            },
            elevation,
        );

        container::Style {
            text_color: Some(VagdeviTheme::ESPRESSO),
            background: Some(Background::Color(background)),
            border: Border::default(),
            shadow: Shadow {
                color: Color {
                    a: VagdeviTheme::SHADOW.a * elevation,
                    ..VagdeviTheme::SHADOW
                },
                offset: Vector::new(0.0, 4.0),
                blur_radius: 16.0 * elevation,
            },
            snap: false,
        }
    }
}

/// Covers a section that has not finished revealing, fading out as `opacity`
/// approaches 1.0.
pub fn reveal_veil(
    opacity: f32,
    backdrop: Color,
) -> impl Fn(&Theme) -> container::Style {
    move |_| container::Style {
        text_color: None,
        background: Some(Background::Color(Color {
            a: (1.0 - opacity).clamp(0.0, 1.0),
            ..backdrop
        })),
        border: Border::default(),
        shadow: Shadow::default(),
        snap: false,
    }
}

// Button styles
#[derive(Debug, Clone, Copy)]
pub enum Button {
    Primary,
    Outline,
    NavLink,
    NavLinkActive,
    Text,
    CarouselArrow,
    CarouselDot,
    CarouselDotActive,
    CarouselItem,
    Disabled,
}

impl Button {
    pub fn style(&self) -> fn(&Theme, button::Status) -> button::Style {
        match self {
            Button::Primary => |_, status| {
                let background = match status {
                    button::Status::Hovered => VagdeviTheme::SAFFRON_HOVER,
                    button::Status::Pressed => {
                        darken(VagdeviTheme::SAFFRON, 0.2)
                    }
                    _ => VagdeviTheme::SAFFRON,
                };

                button::Style {
                    text_color: Color::WHITE,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: background,
                        width: 1.0,
                        radius: 999.0.into(),
                    },
                    shadow: card_shadow(12.0),
                    snap: false,
                }
            },
            Button::Outline => |_, status| {
                let (background, text_color) = match status {
                    button::Status::Hovered | button::Status::Pressed => {
                        (VagdeviTheme::ESPRESSO, Color::WHITE)
                    }
                    _ => (Color::TRANSPARENT, VagdeviTheme::ESPRESSO),
                };

                button::Style {
                    text_color,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: VagdeviTheme::ESPRESSO,
                        width: 1.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::NavLink => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => VagdeviTheme::SAFFRON,
                    _ => VagdeviTheme::ESPRESSO,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::NavLinkActive => |_, _| button::Style {
                text_color: VagdeviTheme::SAFFRON,
                background: Some(Background::Color(Color {
                    a: 0.1,
                    ..VagdeviTheme::SAFFRON
                })),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 8.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Button::Text => |_, status| {
                let text_color = match status {
                    button::Status::Hovered => VagdeviTheme::GOLD,
                    _ => VagdeviTheme::SAFFRON,
                };

                button::Style {
                    text_color,
                    background: None,
                    border: Border::default(),
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::CarouselArrow => |_, status| {
                let alpha = match status {
                    button::Status::Hovered => 1.0,
                    _ => 0.9,
                };

                button::Style {
                    text_color: VagdeviTheme::ESPRESSO,
                    background: Some(Background::Color(Color {
                        a: alpha,
                        ..VagdeviTheme::SURFACE
                    })),
                    border: Border {
                        color: Color::from_rgba(1.0, 1.0, 1.0, 0.5),
                        width: 1.0,
                        radius: 999.0.into(),
                    },
                    shadow: card_shadow(16.0),
                    snap: false,
                }
            },
            Button::CarouselDot => |_, status| {
                let background = match status {
                    button::Status::Hovered => Color {
                        a: 0.5,
                        ..VagdeviTheme::SAFFRON
                    },
                    _ => Color {
                        a: 0.2,
                        ..VagdeviTheme::ESPRESSO
                    },
                };

                button::Style {
                    text_color: Color::TRANSPARENT,
                    background: Some(Background::Color(background)),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 999.0.into(),
                    },
                    shadow: Shadow::default(),
                    snap: false,
                }
            },
            Button::CarouselDotActive => |_, _| button::Style {
                text_color: Color::TRANSPARENT,
                background: Some(Background::Color(VagdeviTheme::SAFFRON)),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
            Button::CarouselItem => |_, _| button::Style {
                text_color: VagdeviTheme::ESPRESSO,
                background: None,
                border: Border::default(),
                shadow: Shadow::default(),
                snap: false,
            },
            Button::Disabled => |_, _| button::Style {
                text_color: Color::WHITE,
                background: Some(Background::Color(Color {
                    a: 0.6,
                    ..VagdeviTheme::SAFFRON
                })),
                border: Border {
                    color: Color::TRANSPARENT,
                    width: 0.0,
                    radius: 999.0.into(),
                },
                shadow: Shadow::default(),
                snap: false,
            },
        }
    }
}

// Scrollable style
#[derive(Debug)]
pub struct Scrollable;

impl Scrollable {
    pub fn style() -> fn(&Theme, scrollable::Status) -> scrollable::Style {
        |_, status| {
            let scroller_color = match status {
                scrollable::Status::Hovered { .. }
                | scrollable::Status::Dragged { .. } => VagdeviTheme::SAFFRON,
                _ => Color {
                    a: 0.4,
                    ..VagdeviTheme::ESPRESSO
                },
            };

            let rail = scrollable::Rail {
                background: None,
                border: Border::default(),
                scroller: scrollable::Scroller {
                    background: Background::Color(scroller_color),
                    border: Border {
                        color: Color::TRANSPARENT,
                        width: 0.0,
                        radius: 4.0.into(),
                    },
                },
            };

            scrollable::Style {
                container: container::Style::default(),
                vertical_rail: rail,
                horizontal_rail: rail,
                gap: None,
                auto_scroll: scrollable::AutoScroll {
                    background: Background::Color(VagdeviTheme::SURFACE),
                    border: Border {
                        color: VagdeviTheme::BORDER_COLOR,
                        width: 1.0,
                        radius: 4.0.into(),
                    },
                    shadow: Shadow {
                        color: VagdeviTheme::SHADOW,
                        offset: Vector::ZERO,
                        blur_radius: 2.0,
                    },
                    icon: VagdeviTheme::ESPRESSO,
                },
            }
        }
    }
}

// Text input style
#[derive(Debug)]
pub struct TextInput;

impl TextInput {
    pub fn style() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_, status| Self::build(status, false)
    }

    pub fn invalid() -> fn(&Theme, text_input::Status) -> text_input::Style {
        |_, status| Self::build(status, true)
    }

    fn build(status: text_input::Status, invalid: bool) -> text_input::Style {
        let (border_color, border_width) = match (status, invalid) {
            (_, true) => (VagdeviTheme::ERROR, 1.0),
            (text_input::Status::Focused { .. }, false) => {
                (VagdeviTheme::SAFFRON, 2.0)
            }
            (text_input::Status::Hovered, false) => (
                Color {
                    a: 0.5,
                    ..VagdeviTheme::SAFFRON
                },
                1.0,
            ),
            _ => (VagdeviTheme::BORDER_COLOR, 1.0),
        };

        let background = match status {
            text_input::Status::Disabled => VagdeviTheme::BACKGROUND_ALT,
            _ => Color {
                a: 0.5,
                ..VagdeviTheme::BACKGROUND
            },
        };

        text_input::Style {
            background: Background::Color(background),
            border: Border {
                color: border_color,
                width: border_width,
                radius: 12.0.into(),
            },
            icon: VagdeviTheme::TEXT_MUTED,
            placeholder: VagdeviTheme::PLACEHOLDER,
            value: VagdeviTheme::ESPRESSO,
            selection: Color {
                a: 0.3,
                ..VagdeviTheme::SAFFRON
            },
        }
    }
}

// Multi-line editor style, matching the text inputs
#[derive(Debug)]
pub struct TextEditor;

impl TextEditor {
    pub fn style() -> fn(&Theme, text_editor::Status) -> text_editor::Style {
        |theme, status| Self::build(theme, status, false)
    }

    pub fn invalid() -> fn(&Theme, text_editor::Status) -> text_editor::Style {
        |theme, status| Self::build(theme, status, true)
    }

    fn build(
        theme: &Theme,
        status: text_editor::Status,
        invalid: bool,
    ) -> text_editor::Style {
        let (border_color, border_width) = match (status, invalid) {
            (_, true) => (VagdeviTheme::ERROR, 1.0),
            (text_editor::Status::Focused { .. }, false) => {
                (VagdeviTheme::SAFFRON, 2.0)
            }
            _ => (VagdeviTheme::BORDER_COLOR, 1.0),
        };

        let background = match status {
            text_editor::Status::Disabled => VagdeviTheme::BACKGROUND_ALT,
            _ => Color {
                a: 0.5,
                ..VagdeviTheme::BACKGROUND
            },
        };

        let mut style = text_editor::default(theme, status);
        style.background = Background::Color(background);
        style.border = Border {
            color: border_color,
            width: border_width,
            radius: 12.0.into(),
        };
        style.placeholder = VagdeviTheme::PLACEHOLDER;
        style.value = VagdeviTheme::ESPRESSO;
        style.selection = Color {
            a: 0.3,
            ..VagdeviTheme::SAFFRON
        };
        style
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn darken_scales_channels_and_keeps_alpha() {
        let darker = darken(Color::from_rgba(0.5, 1.0, 0.2, 0.7), 0.5);
        assert!((darker.r - 0.25).abs() < 0.001);
        assert!((darker.g - 0.5).abs() < 0.001);
        assert!((darker.a - 0.7).abs() < 0.001);
    }
}
