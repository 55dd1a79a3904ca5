/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

//! Reservation form. A valid submission opens WhatsApp with the request
//! prefilled; nothing is stored or sent anywhere else.

use chrono::NaiveDate;
use mims_types::reservation::{
    earliest_reservation_date, guest_label, input_date_value, GUEST_OPTIONS, TIME_SLOTS,
};
use mims_types::whatsapp::reservation_url;
use mims_types::{ReservationError, ReservationForm as Reservation, LOCATIONS};
use wasm_bindgen::JsCast;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::WhatsAppIcon;
use crate::components::reveal::Reveal;
use crate::constants::whatsapp_number;

/// The visitor's local calendar date.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date())
        .unwrap_or_default()
}

pub enum Msg {
    Name(String),
    Email(String),
    Phone(String),
    Guests(String),
    Date(String),
    Time(String),
    Location(String),
    Message(String),
    Submit,
}

pub struct ReservationForm {
    form: Reservation,
    error: Option<ReservationError>,
}

fn input_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlInputElement>().value()
}

fn textarea_value(e: InputEvent) -> String {
    e.target_unchecked_into::<HtmlTextAreaElement>().value()
}

fn selection(e: Event) -> String {
    e.target()
        .map(|target| target.unchecked_into::<HtmlSelectElement>().value())
        .unwrap_or_default()
}

impl ReservationForm {
    fn submit(&mut self) {
        if let Err(e) = self.form.validate(today()) {
            log::warn!("reservation rejected: {e}");
            self.error = Some(e);
            return;
        }
        self.error = None;

        let url = reservation_url(&whatsapp_number(), &self.form);
        log::info!("opening WhatsApp for a reservation of {} guest(s)", self.form.guests);
        match web_sys::window() {
            Some(window) => {
                if let Err(e) = window.open_with_url_and_target(&url, "_blank") {
                    log::error!("failed to open WhatsApp: {e:?}");
                }
            }
            None => log::error!("no window to open WhatsApp from"),
        }
    }

    fn label(text: &'static str) -> Html {
        html! { <label class="form-label">{ text }</label> }
    }
}

impl Component for ReservationForm {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: Reservation::default(),
            error: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Name(value) => self.form.name = value,
            Msg::Email(value) => self.form.email = value,
            Msg::Phone(value) => self.form.phone = value,
            Msg::Guests(value) => self.form.guests = value,
            Msg::Date(value) => self.form.set_date_input(&value),
            Msg::Time(value) => self.form.time = value,
            Msg::Location(value) => self.form.set_location_key(&value),
            Msg::Message(value) => self.form.message = value,
            Msg::Submit => self.submit(),
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });
        let min_date = input_date_value(&earliest_reservation_date(today()));
        let date_value = self.form.date.as_ref().map(input_date_value).unwrap_or_default();
        let location_key = self.form.location.map(|id| id.key()).unwrap_or_default();

        html! {
            <section id="reservation" class="section section-card" data-testid="reservation-section">
                <div class="container narrow">
                    <div class="section-heading">
                        <Reveal><p class="eyebrow">{ "Réservez Votre Table" }</p></Reveal>
                        <Reveal delay_ms={100}><h2 class="section-title">{ "Réservation" }</h2></Reveal>
                    </div>

                    <Reveal>
                        <form class="glass-card reservation-form" {onsubmit} data-testid="reservation-form">
                            <div class="form-row">
                                <div>
                                    { Self::label("Nom *") }
                                    <input class="input-dark" required=true placeholder="Votre nom"
                                           value={self.form.name.clone()}
                                           oninput={link.callback(|e| Msg::Name(input_value(e)))}
                                           data-testid="reservation-name" />
                                </div>
                                <div>
                                    { Self::label("Email *") }
                                    <input class="input-dark" type="email" required=true placeholder="votre@email.com"
                                           value={self.form.email.clone()}
                                           oninput={link.callback(|e| Msg::Email(input_value(e)))}
                                           data-testid="reservation-email" />
                                </div>
                            </div>

                            <div class="form-row">
                                <div>
                                    { Self::label("Téléphone *") }
                                    <input class="input-dark" type="tel" required=true placeholder="+221 XX XXX XX XX"
                                           value={self.form.phone.clone()}
                                           oninput={link.callback(|e| Msg::Phone(input_value(e)))}
                                           data-testid="reservation-phone" />
                                </div>
                                <div>
                                    { Self::label("Personnes *") }
                                    <select class="input-dark" required=true
                                            onchange={link.callback(|e| Msg::Guests(selection(e)))}
                                            data-testid="reservation-guests">
                                        <option value="" selected={self.form.guests.is_empty()} disabled=true>
                                            { "Sélectionner" }
                                        </option>
                                        { for GUEST_OPTIONS.iter().map(|value| html! {
                                            <option key={*value} value={*value} selected={self.form.guests == *value}>
                                                { guest_label(value) }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-row">
                                <div>
                                    { Self::label("Date *") }
                                    <input class="input-dark" type="date" required=true min={min_date}
                                           value={date_value}
                                           onchange={link.callback(|e: Event| {
                                               Msg::Date(e.target_unchecked_into::<HtmlInputElement>().value())
                                           })}
                                           data-testid="reservation-date" />
                                </div>
                                <div>
                                    { Self::label("Heure *") }
                                    <select class="input-dark" required=true
                                            onchange={link.callback(|e| Msg::Time(selection(e)))}
                                            data-testid="reservation-time">
                                        <option value="" selected={self.form.time.is_empty()} disabled=true>
                                            { "Sélectionner" }
                                        </option>
                                        { for TIME_SLOTS.iter().map(|slot| html! {
                                            <option key={*slot} value={*slot} selected={self.form.time == *slot}>
                                                { *slot }
                                            </option>
                                        }) }
                                    </select>
                                </div>
                            </div>

                            <div class="form-field">
                                { Self::label("Restaurant *") }
                                <select class="input-dark" required=true
                                        onchange={link.callback(|e| Msg::Location(selection(e)))}
                                        data-testid="reservation-location">
                                    <option value="" selected={location_key.is_empty()} disabled=true>
                                        { "Choisir un restaurant" }
                                    </option>
                                    { for LOCATIONS.iter().map(|location| html! {
                                        <option key={location.id.key()} value={location.id.key()}
                                                selected={location_key == location.id.key()}>
                                            { location.reservation_label() }
                                        </option>
                                    }) }
                                </select>
                            </div>

                            <div class="form-field">
                                { Self::label("Message (optionnel)") }
                                <textarea class="input-dark" rows="3"
                                          placeholder="Demandes spéciales, allergies, occasion..."
                                          value={self.form.message.clone()}
                                          oninput={link.callback(|e| Msg::Message(textarea_value(e)))}
                                          data-testid="reservation-message" />
                            </div>

                            if let Some(error) = &self.error {
                                <p class="reservation-error" role="alert" data-testid="reservation-error">
                                    { error.to_string() }
                                </p>
                            }

                            <div class="centered-row">
                                <button type="submit" class="btn-gold" data-testid="reservation-submit">
                                    <WhatsAppIcon class={classes!("icon-5")} />
                                    { "Envoyer via WhatsApp" }
                                </button>
                            </div>
                        </form>
                    </Reveal>
                </div>
            </section>
        }
    }
}
