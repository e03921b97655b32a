//! View rendering for the text field.

use lipgloss_extras::prelude::*;
use unicode_width::UnicodeWidthStr;

use super::model::TextField;

fn render(style: &Style, text: &str) -> String {
    if text.is_empty() {
        String::new()
    } else {
        style.render(text)
    }
}

impl TextField {
    /// Renders the prompt followed by the text, with the selection
    /// highlighted and, while focused, a block caret.
    pub fn view(&self) -> String {
        if self.value.is_empty() && !self.placeholder.is_empty() && !self.focus {
            return format!(
                "{}{}",
                self.prompt_style.render(&self.prompt),
                self.placeholder_style.render(&self.placeholder)
            );
        }

        let start = self.selection.start;
        let end = self.selection.end;
        let before: String = self.value[..start].iter().collect();
        let mut v = render(&self.text_style, &before);
        let mut shown = before.width();

        let rest_from = if start < end {
            let selected: String = self.value[start..end].iter().collect();
            shown += selected.width();
            v.push_str(&render(&self.selection_style, &selected));
            end
        } else if self.focus {
            // Caret block over the next character, or a space at the end
            let under = self.value.get(start).map_or(" ".to_string(), |c| c.to_string());
            shown += under.width();
            v.push_str(&render(&self.cursor_style, &under));
            (start + 1).min(self.value.len())
        } else {
            start
        };

        let after: String = self.value[rest_from..].iter().collect();
        shown += after.width();
        v.push_str(&render(&self.text_style, &after));

        if self.width > shown {
            v.push_str(&render(&self.text_style, &" ".repeat(self.width - shown)));
        }

        format!("{}{}", self.prompt_style.render(&self.prompt), v)
    }
}
