use crate::error::CoreError;

pub const QUANTITY_SLOT: &str = "quantity";
pub const TOTAL_SLOT: &str = "total";

pub const DEFAULT_TEMPLATE: &str = "السلام عليكم ورحمة الله باكلم حضرتك بخصوص اوردر زبده المصريين. \
\nاوردر حضرتك متاح للتوصيل غدا ان شاء الله من 4 الى 8م لو مناسب لحضرتك استاذنك اللوكيشن. \
\nاوردر حضرتك: \n{quantity}\
\nالاجمالي: {total}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Quantity,
    Total,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Text(String),
    Slot(Slot),
}

/// A message template with exactly one `{quantity}` and one `{total}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl Default for MessageTemplate {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE).expect("default template is valid")
    }
}

impl MessageTemplate {
    pub fn parse(source: &str) -> Result<Self, CoreError> {
        let quantity = slot_marker(QUANTITY_SLOT);
        let total = slot_marker(TOTAL_SLOT);

        for (name, marker) in [(QUANTITY_SLOT, &quantity), (TOTAL_SLOT, &total)] {
            let count = source.matches(marker.as_str()).count();
            if count != 1 {
                return Err(CoreError::InvalidTemplate { slot: name, count });
            }
        }

        let mut segments = Vec::new();
        let mut rest = source;
        while !rest.is_empty() {
            let next = [(Slot::Quantity, &quantity), (Slot::Total, &total)]
                .into_iter()
                .filter_map(|(slot, marker)| {
                    rest.find(marker.as_str())
                        .map(|pos| (pos, slot, marker.len()))
                })
                .min_by_key(|(pos, _, _)| *pos);
            match next {
                Some((pos, slot, len)) => {
                    if pos > 0 {
                        segments.push(Segment::Text(rest[..pos].to_string()));
                    }
                    segments.push(Segment::Slot(slot));
                    rest = &rest[pos + len..];
                }
                None => {
                    segments.push(Segment::Text(rest.to_string()));
                    rest = "";
                }
            }
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    /// Fills both slots in a single pass; values are inserted verbatim.
    pub fn render(&self, quantity: &str, total: &str) -> String {
        let mut out = String::with_capacity(self.source.len() + quantity.len() + total.len());
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Slot(Slot::Quantity) => out.push_str(quantity),
                Segment::Slot(Slot::Total) => out.push_str(total),
            }
        }
        out
    }
}

fn slot_marker(name: &str) -> String {
    format!("{{{name}}}")
}

#[cfg(test)]
mod tests {
    use super::MessageTemplate;
    use crate::error::CoreError;

    #[test]
    fn render_fills_both_slots() {
        let template = MessageTemplate::parse("Order: {quantity}\nTotal: {total}").unwrap();
        assert_eq!(template.render("a: 1", "150"), "Order: a: 1\nTotal: 150");
    }

    #[test]
    fn render_accepts_slots_in_any_order() {
        let template = MessageTemplate::parse("{total} for {quantity}").unwrap();
        assert_eq!(template.render("x", "9"), "9 for x");
    }

    #[test]
    fn render_does_not_expand_markers_inside_values() {
        let template = MessageTemplate::parse("{quantity}|{total}").unwrap();
        assert_eq!(template.render("{total}", "7"), "{total}|7");
    }

    #[test]
    fn parse_rejects_missing_or_repeated_slots() {
        let err = MessageTemplate::parse("Total: {total}").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTemplate {
                slot: "quantity",
                count: 0
            }
        );

        let err = MessageTemplate::parse("{quantity} {total} {total}").unwrap_err();
        assert_eq!(
            err,
            CoreError::InvalidTemplate {
                slot: "total",
                count: 2
            }
        );
    }

    #[test]
    fn default_template_has_both_slots() {
        let template = MessageTemplate::default();
        let message = template.render("صنف1: 3", "150");
        assert!(message.contains("\nاوردر حضرتك: \nصنف1: 3"));
        assert!(message.ends_with("\nالاجمالي: 150"));
    }
}
