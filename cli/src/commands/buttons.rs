//! BUTTONS command - Button style showcase.

use anyhow::Result;
use clap::Args;
use colored::{ColoredString, Colorize};

/// Arguments for the buttons command.
#[derive(Args)]
pub struct ButtonsArgs {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Default,
    Secondary,
    Destructive,
    Outline,
    Ghost,
    Link,
}

impl Variant {
    pub const ALL: [Variant; 6] = [
        Variant::Default,
        Variant::Secondary,
        Variant::Destructive,
        Variant::Outline,
        Variant::Ghost,
        Variant::Link,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Secondary => "Secondary",
            Self::Destructive => "Destructive",
            Self::Outline => "Outline",
            Self::Ghost => "Ghost",
            Self::Link => "Link",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Size {
    Small,
    Default,
    Large,
    Icon,
}

impl Size {
    /// Spaces on each side of the label.
    fn padding(self) -> usize {
        match self {
            Self::Small => 1,
            Self::Default => 2,
            Self::Large => 4,
            Self::Icon => 1,
        }
    }
}

/// A button rendered as terminal text.
#[derive(Debug, Clone, Copy)]
pub struct Button<'a> {
    pub label: &'a str,
    pub variant: Variant,
    pub size: Size,
    pub disabled: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str) -> Self {
        Self {
            label,
            variant: Variant::Default,
            size: Size::Default,
            disabled: false,
        }
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Label with size padding and variant framing, before colors.
    pub fn text(&self) -> String {
        let pad = " ".repeat(self.size.padding());
        if self.variant == Variant::Outline {
            format!("[{pad}{}{pad}]", self.label)
        } else {
            format!("{pad}{}{pad}", self.label)
        }
    }

    pub fn render(&self) -> ColoredString {
        let text = self.text();
        let styled = match self.variant {
            Variant::Default => text.white().on_black().bold(),
            Variant::Secondary => text.black().on_white(),
            Variant::Destructive => text.white().on_red().bold(),
            Variant::Outline => text.normal(),
            Variant::Ghost => text.bright_black(),
            Variant::Link => text.blue().underline(),
        };
        if self.disabled { styled.dimmed() } else { styled }
    }
}

fn section(title: &str, description: &str) {
    println!();
    println!("{}", title.bold());
    println!("{}", description.dimmed());
}

fn row(buttons: &[Button<'_>]) {
    let rendered: Vec<String> = buttons.iter().map(|b| b.render().to_string()).collect();
    println!("  {}", rendered.join("  "));
}

/// Execute the buttons command.
pub fn execute(_args: ButtonsArgs) -> Result<()> {
    println!("{}", "Button Variants".green().bold());
    println!("{}", "All available button variants and styles".dimmed());

    section("Default Variants", "All button style variants");
    let variants: Vec<Button<'_>> = Variant::ALL
        .iter()
        .map(|v| Button::new(v.label()).variant(*v))
        .collect();
    row(&variants);

    section("Button Sizes", "Different button sizes");
    row(&[
        Button::new("Small").size(Size::Small),
        Button::new("Default"),
        Button::new("Large").size(Size::Large),
    ]);
    row(&[
        Button::new("Small Outline").size(Size::Small).variant(Variant::Outline),
        Button::new("Default Outline").variant(Variant::Outline),
        Button::new("Large Outline").size(Size::Large).variant(Variant::Outline),
    ]);

    section("Icon Buttons", "Buttons with icons");
    row(&[
        Button::new("⚙").size(Size::Icon),
        Button::new("⇩").size(Size::Icon).variant(Variant::Outline),
        Button::new("♥").size(Size::Icon).variant(Variant::Ghost),
        Button::new("✕").size(Size::Icon).variant(Variant::Destructive),
    ]);
    row(&[
        Button::new("+ Add Item"),
        Button::new("⇩ Download").variant(Variant::Outline),
        Button::new("✉ Send Email").variant(Variant::Secondary),
        Button::new("✕ Delete").variant(Variant::Destructive),
    ]);

    section("Loading States", "Buttons with loading indicators");
    row(&[
        Button::new("⟳ Please wait").disabled(),
        Button::new("⟳ Loading...").variant(Variant::Outline).disabled(),
    ]);

    section("Disabled States", "Buttons in disabled state");
    let disabled: Vec<Button<'_>> = Variant::ALL
        .iter()
        .map(|v| Button::new("Disabled").variant(*v).disabled())
        .collect();
    row(&disabled);

    section("All Variants with Icons", "Every variant paired with an icon");
    row(&[
        Button::new("✓ Confirm"),
        Button::new("⚙ Settings").variant(Variant::Secondary),
        Button::new("✕ Remove").variant(Variant::Destructive),
        Button::new("→ Continue").variant(Variant::Outline),
        Button::new("♥ Like").variant(Variant::Ghost),
        Button::new("Learn more →").variant(Variant::Link),
    ]);

    Ok(())
}
