use crate::i18n::t;
use web_sys::HtmlInputElement;
use yew::prelude::*;

/// Categorical selects of the maintenance form and their option values.
pub const PM_CHOICES: &[(&str, &[&str])] = &[
    ("content_type", &["static", "video", "mixed"]),
    ("media_source", &["usb", "network", "hdmi"]),
    ("ip_rating", &["IP54", "IP65", "IP67"]),
    ("install_type", &["wall", "pole", "stand", "ceiling"]),
];

/// Range slider with a mirrored number box.
struct Slider {
    name: &'static str,
    min: u32,
    max: u32,
    initial: u32,
}

const SLIDERS: [Slider; 3] = [
    Slider {
        name: "daily_hours",
        min: 0,
        max: 24,
        initial: 12,
    },
    Slider {
        name: "humidity_pct",
        min: 0,
        max: 100,
        initial: 50,
    },
    Slider {
        name: "reboots_per_week",
        min: 0,
        max: 30,
        initial: 2,
    },
];

const OLDEST_INSTALL_YEAR: i32 = 2015;

fn current_year() -> i32 {
    #[cfg(target_arch = "wasm32")]
    {
        #[allow(clippy::cast_possible_truncation)]
        let year = js_sys::Date::new_0().get_full_year() as i32;
        year
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        2025
    }
}

/// Selectable installation years, newest first.
#[must_use]
pub fn install_years(current: i32) -> Vec<i32> {
    (OLDEST_INSTALL_YEAR..=current.max(OLDEST_INSTALL_YEAR)).rev().collect()
}

fn label(name: &str) -> String {
    t(&format!("forms.pm.fields.{name}"))
}

fn text_input(name: &'static str) -> Html {
    html! {
        <label class="field" for={name}>
            <span class="field-label">{ label(name) }</span>
            <input id={name} name={name} type="text" required=true
                placeholder={t(&format!("forms.pm.placeholders.{name}"))} />
        </label>
    }
}

fn number_input(id: &'static str, name: &'static str, min: &'static str, max: &'static str, step: &'static str) -> Html {
    html! {
        <label class="field" for={id}>
            <span class="field-label">{ label(name) }</span>
            <input {id} {name} type="number" inputmode="decimal" {min} {max} {step} required=true />
        </label>
    }
}

fn select(name: &'static str, options: Html) -> Html {
    html! {
        <label class="field" for={name}>
            <span class="field-label">{ label(name) }</span>
            <select id={name} name={name} required=true>
                <option value="" selected=true disabled=true>{ t("forms.choose") }</option>
                { options }
            </select>
        </label>
    }
}

#[derive(Properties, PartialEq, Clone)]
struct SliderProps {
    name: &'static str,
    min: u32,
    max: u32,
    initial: u32,
}

/// The range input carries the submitted value; the number box only mirrors it.
#[function_component(SliderField)]
fn slider_field(props: &SliderProps) -> Html {
    let value = use_state(|| props.initial.to_string());
    let on_input = {
        let value = value.clone();
        Callback::from(move |event: InputEvent| {
            let input: HtmlInputElement = event.target_unchecked_into();
            value.set(input.value());
        })
    };
    let mirror_id = format!("{}_num", props.name);
    html! {
        <label class="field slider" for={props.name}>
            <span class="field-label">{ label(props.name) }</span>
            <input id={props.name} name={props.name} type="range"
                min={props.min.to_string()} max={props.max.to_string()} step="1"
                value={(*value).clone()} oninput={on_input.clone()} />
            <input id={mirror_id} type="number"
                min={props.min.to_string()} max={props.max.to_string()} step="1"
                value={(*value).clone()} oninput={on_input} />
        </label>
    }
}

#[function_component(MaintenanceFields)]
pub fn maintenance_fields() -> Html {
    let choices = PM_CHOICES.iter().map(|(name, values)| {
        let options: Html = values
            .iter()
            .map(|value| {
                html! {
                    <option value={*value}>{ t(&format!("forms.pm.options.{name}.{value}")) }</option>
                }
            })
            .collect();
        select(*name, options)
    });
    let months: Html = (1..=12)
        .map(|month| {
            html! {
                <option value={month.to_string()}>{ t(&format!("forms.pm.months.{month}")) }</option>
            }
        })
        .collect();
    let years: Html = install_years(current_year())
        .into_iter()
        .map(|year| html! { <option value={year.to_string()}>{ year.to_string() }</option> })
        .collect();

    html! {
        <>
            { text_input("model") }
            { text_input("resolution") }
            { for choices }
            { select("install_month", months) }
            { select("install_year", years) }
            { for SLIDERS.iter().map(|s| html! {
                <SliderField name={s.name} min={s.min} max={s.max} initial={s.initial} />
            }) }
            { number_input("rated_power_w", "rated_power_w", "0", "5000", "1") }
            { number_input("height_m", "height_m", "0.5", "3", "0.1") }
            { number_input("width_m", "width_m", "0.5", "3", "0.1") }
            { number_input("temp_c", "temperature", "-30", "70", "0.5") }
        </>
    }
}
