use yew::prelude::*;

use crate::content::{display_index, FaqItem};

#[derive(Properties, PartialEq)]
pub struct FaqAccordionItemProps {
    pub faq: FaqItem,
    pub index: usize,
}

pub fn question_id(index: usize) -> String {
    format!("faq-question-{}", index)
}

pub fn answer_id(index: usize) -> String {
    format!("faq-answer-{}", index)
}

/// A row's next state after a click on its header. Rows never look at each other.
pub fn toggle_row(open: bool) -> bool {
    !open
}

#[function_component(FaqAccordionItem)]
pub fn faq_accordion_item(props: &FaqAccordionItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |_: MouseEvent| is_open.set(toggle_row(*is_open)))
    };

    let answer_id = answer_id(props.index);

    html! {
        <div class={classes!("faq-row", (*is_open).then_some("open"))}>
            <button
                type="button"
                id={question_id(props.index)}
                class="faq-row-question"
                onclick={toggle}
                aria-expanded={if *is_open { "true" } else { "false" }}
                aria-controls={answer_id.clone()}
            >
                <span class="faq-row-index">{display_index(props.index)}</span>
                <span class="faq-row-text">{props.faq.question}</span>
                <span class="faq-row-icon" aria-hidden="true">{if *is_open { "−" } else { "+" }}</span>
            </button>
            <div
                id={answer_id}
                class="faq-row-answer"
                role="region"
                aria-labelledby={question_id(props.index)}
                aria-hidden={if *is_open { "false" } else { "true" }}
                inert={(!*is_open).then_some("")}
            >
                <div class="faq-row-answer-inner">
                    <p>{props.faq.answer}</p>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::FAQS;
    use yew::LocalServerRenderer;

    #[test]
    fn ids_pair_question_and_answer_by_index() {
        assert_eq!(question_id(2), "faq-question-2");
        assert_eq!(answer_id(2), "faq-answer-2");
        assert_ne!(answer_id(1), answer_id(10));
    }

    /// Clicks row `index` the way each mounted item does: only its own flag moves.
    fn click(rows: &mut [bool], index: usize) {
        rows[index] = toggle_row(rows[index]);
    }

    #[test]
    fn clicking_a_row_toggles_only_that_row() {
        let mut rows = vec![false; FAQS.len()];

        click(&mut rows, 2);
        assert_eq!(rows, [false, false, true, false]);

        click(&mut rows, 2);
        assert_eq!(rows, [false, false, false, false]);

        click(&mut rows, 2);
        click(&mut rows, 0);
        assert_eq!(rows, [true, false, true, false]);

        click(&mut rows, 0);
        assert!(rows[2], "closing row 0 must not collapse row 2");
    }

    #[test]
    fn rows_may_be_open_together() {
        let mut rows = vec![false; FAQS.len()];
        for index in 0..rows.len() {
            click(&mut rows, index);
        }
        assert!(rows.iter().all(|open| *open));
    }

    #[tokio::test]
    async fn starts_collapsed() {
        let props = FaqAccordionItemProps {
            faq: FAQS[2].clone(),
            index: 2,
        };
        let html = LocalServerRenderer::<FaqAccordionItem>::with_props(props)
            .render()
            .await;

        assert!(html.contains("aria-expanded=\"false\""));
        assert!(html.contains("aria-controls=\"faq-answer-2\""));
        assert!(html.contains("aria-labelledby=\"faq-question-2\""));
        assert!(html.contains("/03"));
        assert!(!html.contains("class=\"faq-row open\""));
        assert!(html.contains("type=\"button\""));
    }
}
