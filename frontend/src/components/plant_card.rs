use shared::{PlantCard, PlantId};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PlantCardProps {
    pub card: PlantCard,
    #[prop_or_default]
    pub actions_disabled: bool,
    pub on_edit: Callback<PlantId>,
    pub on_delete: Callback<PlantId>,
}

#[function_component(PlantCardView)]
pub fn plant_card(props: &PlantCardProps) -> Html {
    let card = &props.card;

    let on_edit = {
        let on_edit = props.on_edit.clone();
        let id = card.id.clone();
        Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
    };

    let on_delete = {
        let on_delete = props.on_delete.clone();
        let id = card.id.clone();
        Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
    };

    html! {
        <div class="col-md-6 col-lg-4">
            <div class="card h-100">
                {if let Some(image) = &card.image {
                    html! {
                        <img src={image.clone()} class="card-img-top plant-photo" alt={card.common_name.clone()} />
                    }
                } else {
                    html! {}
                }}
                <div class="card-body">
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <h5 class="card-title">{card.common_name.clone()}</h5>
                        <span class="badge bg-success age-badge">{card.age_badge.clone()}</span>
                    </div>
                    <h6 class="card-subtitle mb-2 text-muted">{card.scientific_name.clone()}</h6>
                    <p class="card-text">
                        <strong>{"Produção média: "}</strong>{card.average_production.clone()}<br />
                        <strong>{"Plantio: "}</strong>{card.planting_date.clone()}
                    </p>
                </div>
                <div class="card-footer bg-transparent d-flex justify-content-between align-items-center">
                    <small class="text-muted">{format!("ID: {}", card.id)}</small>
                    <div class="card-actions">
                        <button type="button" class="btn btn-sm btn-outline-primary" onclick={on_edit} disabled={props.actions_disabled}>
                            {"Editar"}
                        </button>
                        <button type="button" class="btn btn-sm btn-outline-danger" onclick={on_delete} disabled={props.actions_disabled}>
                            {"Remover"}
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
