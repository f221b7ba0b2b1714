use colored::Colorize;
use unicode_width::UnicodeWidthStr;
use wbtags::api::{CmdMessage, MessageLevel, WorldTags};
use wbtags::tags::format_tag_input;

const MAX_NAME_WIDTH: usize = 40;

pub(crate) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

pub(crate) fn print_worlds(worlds: &[WorldTags]) {
    let width = worlds
        .iter()
        .map(|w| w.name.width())
        .max()
        .unwrap_or(0)
        .min(MAX_NAME_WIDTH);

    for world in worlds {
        let padding = width.saturating_sub(world.name.width());
        if world.tags.is_empty() {
            println!("{}", world.name.bold());
        } else {
            println!(
                "{}{}  {}",
                world.name.bold(),
                " ".repeat(padding),
                format_tag_input(&world.tags).cyan()
            );
        }
    }
}

pub(crate) fn print_tags(tags: &[String]) {
    for tag in tags {
        println!("{}", tag);
    }
}
