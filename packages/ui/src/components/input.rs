use dioxus::prelude::*;

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] class: String,
    value: String,
    oninput: EventHandler<FormEvent>,
) -> Element {
    let type_attr = r#type;
    rsx! {
        input {
            id: "{id}",
            r#type: "{type_attr}",
            class: "input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            oninput: move |evt| oninput.call(evt),
        }
    }
}
