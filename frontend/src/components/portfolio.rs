use yew::prelude::*;

use crate::content::{portfolio_ordinal, PortfolioItem};

#[derive(Properties, PartialEq)]
pub struct PortfolioProps {
    pub items: &'static [PortfolioItem],
}

#[function_component(Portfolio)]
pub fn portfolio(props: &PortfolioProps) -> Html {
    html! {
        <div class="portfolio-list">
            { for props.items.iter().enumerate().map(|(index, item)| html! {
                <article
                    key={item.id}
                    class={classes!("case-study", (!PortfolioItem::image_first(index)).then_some("mirrored"))}
                >
                    <div class="case-image">
                        <div class="case-image-tint"></div>
                        <img src={item.image} alt={item.image_alt()} loading="lazy" />
                        <div class="case-image-cta">
                            <button>{"View Case Study"}</button>
                        </div>
                    </div>

                    <div class="case-text">
                        <div class="case-meta">
                            <span class="case-ordinal">{portfolio_ordinal(index)}</span>
                            <div class="case-rule"></div>
                            <span class="case-category">{item.category}</span>
                        </div>
                        <h3>{item.client}</h3>
                        <div class="case-stats">
                            { for item.stats.iter().map(|stat| html! {
                                <div key={stat.label}>
                                    <div class="case-stat-value">{stat.value}</div>
                                    <div class="case-stat-label">{stat.label}</div>
                                </div>
                            }) }
                        </div>
                    </div>
                </article>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::PORTFOLIO;
    use yew::LocalServerRenderer;

    #[tokio::test]
    async fn alternates_rows_and_lazy_loads_images() {
        let html = LocalServerRenderer::<Portfolio>::with_props(PortfolioProps { items: PORTFOLIO })
            .render()
            .await;

        assert_eq!(html.matches("class=\"case-study\"").count(), 2);
        assert_eq!(html.matches("class=\"case-study mirrored\"").count(), 1);
        assert_eq!(html.matches("loading=\"lazy\"").count(), PORTFOLIO.len());
        assert!(html.contains("+580%"));
    }
}
