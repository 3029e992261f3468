use kas::draw::color::Rgba8Srgb;
use kas::prelude::*;
use kas_fixed_window::{Error, FixedSize, FontWeight, LabelDesc, LabelStyle, WindowDesc, config};

fn use_window(_: Window<()>) {}

#[test]
fn plain() {
    let desc = config::plain();
    assert_eq!(desc.title(), config::PLAIN_TITLE);
    assert_eq!(desc.size(), FixedSize::new(600, 400));
    assert_eq!(desc.reserved_px().unwrap(), (600, 400));
    let window = desc.build().unwrap();
    assert_eq!(window.restrictions(), (true, true));
    use_window(window);
}

#[test]
fn greeting() {
    let desc = config::greeting();
    assert_eq!(desc.title(), config::GREETING_TITLE);
    assert_eq!(desc.size(), config::SIZE);
    assert_eq!(desc.label().unwrap().style(), &config::greeting_style());
    let window = desc.build().unwrap();
    assert_eq!(window.restrictions(), (true, true));
    use_window(window);
}

#[test]
fn label_with_markdown_text() {
    let style = LabelStyle::new(16.0, FontWeight::Bold, Rgba8Srgb::rgb(200, 0, 0));
    let text = "# Not a heading\n- not a list\n`not code` [not a link](x) ***";
    let desc = WindowDesc::new("Literal", FixedSize::new(200, 100))
        .with_label(LabelDesc::new(text, style));
    use_window(desc.build().unwrap());
}

#[test]
fn empty_label() {
    let style = LabelStyle::new(16.0, FontWeight::Bold, Rgba8Srgb::grey(0));
    let desc = WindowDesc::new("", FixedSize::new(0, 0)).with_label(LabelDesc::new("", style));
    use_window(desc.build().unwrap());
}

#[test]
fn oversized() {
    let desc = WindowDesc::new("Too wide", FixedSize::new(u32::MAX, 400));
    assert!(matches!(desc.build(), Err(Error::Dimension(u32::MAX))));
}

#[test]
fn display_once() {
    let desc = config::greeting();
    let windows = desc.display(|window| vec![window]).unwrap();
    assert_eq!(windows.len(), 1);
}
