use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

use crate::presentation::Choice;

/// One button per row, in choice order; the token travels as callback data.
pub(crate) fn choices_keyboard(choices: &[Choice]) -> InlineKeyboardMarkup {
    let keyboard: Vec<Vec<InlineKeyboardButton>> = choices
        .iter()
        .map(|choice| {
            vec![InlineKeyboardButton::callback(
                choice.label.clone(),
                choice.token.clone(),
            )]
        })
        .collect();

    InlineKeyboardMarkup::new(keyboard)
}

#[cfg(test)]
mod tests {
    use teloxide::types::InlineKeyboardButtonKind;

    use super::*;

    #[test]
    fn builds_a_single_column() {
        let choices = vec![
            Choice {
                label: "पेरिस".into(),
                token: "Paris".into(),
            },
            Choice {
                label: "रोम".into(),
                token: "Rome".into(),
            },
        ];

        let markup = choices_keyboard(&choices);
        assert_eq!(markup.inline_keyboard.len(), 2);

        let first = &markup.inline_keyboard[0];
        assert_eq!(first.len(), 1);
        assert_eq!(first[0].text, "पेरिस");
        assert!(matches!(
            &first[0].kind,
            InlineKeyboardButtonKind::CallbackData(data) if data == "Paris"
        ));
        assert!(matches!(
            &markup.inline_keyboard[1][0].kind,
            InlineKeyboardButtonKind::CallbackData(data) if data == "Rome"
        ));
    }

    #[test]
    fn no_choices_no_rows() {
        assert!(choices_keyboard(&[]).inline_keyboard.is_empty());
    }
}
