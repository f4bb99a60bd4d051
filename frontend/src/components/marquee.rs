use yew::prelude::*;

/// Copies of the text per track. Two tracks run back to back so the loop
/// restarts without a visible seam.
pub const MARQUEE_REPEAT: usize = 10;

#[derive(Properties, PartialEq)]
pub struct MarqueeProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub reverse: bool,
    #[prop_or_default]
    pub rotate: bool,
    #[prop_or_default]
    pub class: Classes,
}

fn track_class(reverse: bool) -> Classes {
    classes!("marquee-track", reverse.then_some("reverse"))
}

#[function_component(Marquee)]
pub fn marquee(props: &MarqueeProps) -> Html {
    let track = |text: &AttrValue| {
        html! {
            <div class={track_class(props.reverse)}>
                { for (0..MARQUEE_REPEAT).map(|i| html! {
                    <span key={i} class="marquee-phrase">
                        {text.clone()}
                        <span class="marquee-dot"></span>
                    </span>
                }) }
            </div>
        }
    };

    html! {
        <div class={classes!("marquee", props.rotate.then_some("rotated"), props.class.clone())}>
            { track(&props.text) }
            { track(&props.text) }
            <style>
                {r#"
                .marquee {
                    position: relative;
                    display: flex;
                    overflow: hidden;
                    white-space: nowrap;
                    background: #ff2a2a;
                    padding: 1rem 0;
                    color: #000;
                    font-family: 'Anton', 'Impact', sans-serif;
                    text-transform: uppercase;
                    letter-spacing: -0.05em;
                }

                .marquee.rotated {
                    transform: rotate(-2deg) scale(1.05);
                    z-index: 10;
                }

                .marquee-track {
                    display: flex;
                    flex-shrink: 0;
                    align-items: center;
                    animation: marquee 25s linear infinite;
                }

                .marquee-track.reverse {
                    animation-name: marquee-reverse;
                }

                .marquee-phrase {
                    display: flex;
                    align-items: center;
                    padding: 0 1rem;
                    font-size: 1.25rem;
                }

                .marquee-dot {
                    display: block;
                    width: 1rem;
                    height: 1rem;
                    margin-left: 1rem;
                    border-radius: 50%;
                    background: #000;
                }

                @keyframes marquee {
                    from { transform: translateX(0); }
                    to { transform: translateX(-100%); }
                }

                @keyframes marquee-reverse {
                    from { transform: translateX(-100%); }
                    to { transform: translateX(0); }
                }

                @media (min-width: 768px) {
                    .marquee-phrase {
                        font-size: 1.875rem;
                    }
                }
                "#}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yew::LocalServerRenderer;

    async fn render(props: MarqueeProps) -> String {
        LocalServerRenderer::<Marquee>::with_props(props).render().await
    }

    fn props(reverse: bool, rotate: bool) -> MarqueeProps {
        MarqueeProps {
            text: AttrValue::from("CONTROL +"),
            reverse,
            rotate,
            class: Classes::new(),
        }
    }

    #[tokio::test]
    async fn renders_two_full_tracks() {
        let html = render(props(false, false)).await;
        assert_eq!(html.matches("class=\"marquee-track\"").count(), 2);
        assert_eq!(html.matches("CONTROL +").count(), 2 * MARQUEE_REPEAT);
        assert!(!html.contains("class=\"marquee-track reverse\""));
        assert!(!html.contains("class=\"marquee rotated\""));
    }

    #[tokio::test]
    async fn reverse_changes_direction_not_text() {
        let forward = render(props(false, false)).await;
        let backward = render(props(true, false)).await;
        assert_eq!(backward.matches("class=\"marquee-track reverse\"").count(), 2);
        assert_eq!(
            forward.matches("CONTROL +").count(),
            backward.matches("CONTROL +").count()
        );
    }

    #[tokio::test]
    async fn rotate_tilts_the_strip() {
        let html = render(props(false, true)).await;
        assert!(html.contains("class=\"marquee rotated\""));
    }
}
