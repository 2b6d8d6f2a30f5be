use super::{CardData, CardKind, Layout};

pub(super) fn compute_placeholder_layout(
    kind: CardKind,
    message: &str,
    width: f32,
    height: f32,
) -> Layout {
    Layout {
        kind,
        width: width.max(1.0),
        height: height.max(1.0),
        card: CardData::Placeholder {
            message: message.to_string(),
        },
    }
}
