use bmtree::operations::TreeStats;
use owo_colors::OwoColorize;

pub trait Colorize {
    fn to_colored(&self) -> String;
    fn to_plain(&self) -> String;

    fn render(&self, no_color: bool) -> String {
        if no_color {
            self.to_plain()
        } else {
            self.to_colored()
        }
    }
}

pub struct ColorizeStats<'a>(pub &'a TreeStats);

impl<'a> ColorizeStats<'a> {
    fn rows(&self) -> [(&'static str, usize); 3] {
        [
            ("Bookmarks", self.0.bookmarks),
            ("Folders", self.0.folders),
            ("Max depth", self.0.max_depth),
        ]
    }
}

impl<'a> Colorize for ColorizeStats<'a> {
    fn to_colored(&self) -> String {
        let mut s = String::new();
        for (label, value) in self.rows() {
            // pad before coloring so escape codes don't skew alignment
            let label = format!("{:<10}", label);
            s.push_str(&format!("{} {}\n", label.bold(), value.bright_blue()));
        }
        s
    }

    fn to_plain(&self) -> String {
        let mut s = String::new();
        for (label, value) in self.rows() {
            s.push_str(&format!("{:<10} {}\n", label, value));
        }
        s
    }
}

pub fn success(msg: &str, no_color: bool) -> String {
    if no_color {
        format!("✓ {}", msg)
    } else {
        format!("{} {}", "✓".green().bold(), msg)
    }
}

pub fn failure(msg: &str, no_color: bool) -> String {
    if no_color {
        format!("✗ Error: {}", msg)
    } else {
        format!("{} {}", "✗ Error:".red().bold(), msg)
    }
}
