use shared::{PlantCard, PlantId};
use yew::prelude::*;

use super::plant_card::PlantCardView;

#[derive(Properties, PartialEq)]
pub struct PlantGridProps {
    pub cards: Vec<PlantCard>,
    pub show_empty_state: bool,
    #[prop_or_default]
    pub actions_disabled: bool,
    pub on_edit: Callback<PlantId>,
    pub on_delete: Callback<PlantId>,
}

#[function_component(PlantGrid)]
pub fn plant_grid(props: &PlantGridProps) -> Html {
    html! {
        <section class="plants">
            <div class={classes!("alert", "alert-info", (!props.show_empty_state).then_some("d-none"))}>
                {"Nenhuma planta cadastrada. Clique em \"Adicionar Planta\" para começar."}
            </div>
            <div class="row g-4">
                {for props.cards.iter().map(|card| html! {
                    <PlantCardView
                        key={card.id.to_string()}
                        card={card.clone()}
                        actions_disabled={props.actions_disabled}
                        on_edit={props.on_edit.clone()}
                        on_delete={props.on_delete.clone()}
                    />
                })}
            </div>
        </section>
    }
}
