use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub plant_count: usize,
    /// True while a save is pending
    #[prop_or_default]
    pub disabled: bool,
    pub on_add: Callback<()>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    html! {
        <header class="header">
            <div class="container d-flex justify-content-between align-items-center">
                <h1>{"🌳 Fruteiras do Brejo Paraibano"}</h1>
                <div class="header-right">
                    <span class="plant-count">
                        {match props.plant_count {
                            1 => "1 planta".to_string(),
                            n => format!("{} plantas", n),
                        }}
                    </span>
                    <button type="button" class="btn btn-success" onclick={on_add} disabled={props.disabled}>
                        {"Adicionar Planta"}
                    </button>
                </div>
            </div>
        </header>
    }
}
