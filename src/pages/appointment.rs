//! Appointment Page
//!
//! Cascading booking form over the mocked provider catalog: pick a doctor
//! and a date to reveal the open time slots, then submit with a reason.

use leptos::*;

use crate::booking::{format_slot_12h, BookingForm, Catalog};
use crate::state::global::GlobalState;

/// Appointment scheduling page component
#[component]
pub fn Appointment() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Read-only seed data and the one mutable form-state object.
    let catalog = store_value(Catalog::seed());
    let form = create_rw_signal(BookingForm::default());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let notice = form
            .try_update(|f| f.submit())
            .expect("booking form signal disposed");
        state.show_notice(notice);
    };

    view! {
        <div class="max-w-2xl mx-auto space-y-8">
            // Page header
            <div class="flex flex-col items-center text-center">
                <span class="text-5xl mb-2">"🩺"</span>
                <h1 class="text-3xl font-bold">"Schedule an Appointment"</h1>
                <p class="text-gray-400 mt-1">
                    "Select a doctor, date, and time to book your appointment."
                </p>
            </div>

            <form on:submit=on_submit class="bg-gray-800 rounded-xl p-6 space-y-6">
                <ProviderSelect form=form catalog=catalog />

                <DateField form=form />

                <SlotPicker form=form catalog=catalog />

                <ReasonField form=form />

                // The button is gated on provider, date and time only; the
                // reason is checked by the submit guard instead.
                <button
                    type="submit"
                    disabled=move || !form.with(|f| f.ready_to_submit())
                    class="w-full bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           disabled:cursor-not-allowed rounded-lg py-3 font-semibold
                           transition-colors"
                >
                    "Book Appointment"
                </button>
            </form>
        </div>
    }
}

#[component]
fn ProviderSelect(
    form: RwSignal<BookingForm>,
    catalog: StoredValue<Catalog>,
) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Select Doctor"</label>
            <select
                on:change=move |ev| form.update(|f| f.choose_provider(&event_target_value(&ev)))
                prop:value=move || form.with(|f| f.provider_id().to_string())
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            >
                <option value="">"Choose a doctor"</option>
                {catalog.with_value(|c| {
                    c.providers()
                        .iter()
                        .map(|p| view! {
                            <option value=p.id.clone()>{p.display_name()}</option>
                        })
                        .collect_view()
                })}
            </select>
        </div>
    }
}

#[component]
fn DateField(form: RwSignal<BookingForm>) -> impl IntoView {
    // Past dates are not selectable.
    let today = chrono::Local::now().date_naive().format("%Y-%m-%d").to_string();

    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Select Date"</label>
            <input
                type="date"
                min=today
                prop:value=move || {
                    form.with(|f| {
                        f.date()
                            .map(|d| d.format("%Y-%m-%d").to_string())
                            .unwrap_or_default()
                    })
                }
                on:input=move |ev| {
                    let raw = event_target_value(&ev);
                    let parsed = match chrono::NaiveDate::parse_from_str(&raw, "%Y-%m-%d") {
                        Ok(date) => Some(date),
                        Err(e) => {
                            if !raw.is_empty() {
                                web_sys::console::error_1(
                                    &format!("Ignoring unparseable date {:?}: {}", raw, e).into(),
                                );
                            }
                            None
                        }
                    };
                    form.update(|f| f.choose_date(parsed));
                }
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
        </div>
    }
}

/// Time-slot picker, shown once both a doctor and a date are picked.
#[component]
fn SlotPicker(
    form: RwSignal<BookingForm>,
    catalog: StoredValue<Catalog>,
) -> impl IntoView {
    let picker_open =
        move || form.with(|f| !f.provider_id().is_empty() && f.date().is_some());

    view! {
        {move || {
            if !picker_open() {
                return view! {}.into_view();
            }

            let slots =
                catalog.with_value(|c| form.with(|f| f.available_slots(c).to_vec()));

            if slots.is_empty() {
                view! {
                    <p class="text-gray-400">
                        "No available slots for the selected date. Please try another date."
                    </p>
                }
                .into_view()
            } else {
                view! {
                    <div>
                        <h2 class="text-lg font-semibold mb-3">"Available Time Slots"</h2>
                        <div class="flex flex-wrap gap-2">
                            {slots
                                .into_iter()
                                .map(|slot| view! {
                                    <SlotButton form=form catalog=catalog label=slot />
                                })
                                .collect_view()}
                        </div>
                    </div>
                }
                .into_view()
            }
        }}
    }
}

/// One toggle button per slot; the selected slot is filled, the rest are
/// outlined. Selecting another slot replaces the current one.
#[component]
fn SlotButton(
    form: RwSignal<BookingForm>,
    catalog: StoredValue<Catalog>,
    label: String,
) -> impl IntoView {
    let pick_label = label.clone();
    let shown_label = label.clone();

    view! {
        <button
            type="button"
            on:click=move |_| {
                catalog.with_value(|c| form.update(|f| f.choose_time(c, &pick_label)))
            }
            class=move || {
                let base = "min-w-[100px] px-4 py-2 rounded-lg text-sm font-medium \
                            transition-colors border";
                if form.with(|f| f.time() == Some(shown_label.as_str())) {
                    format!("{} bg-primary-600 border-primary-600 text-white", base)
                } else {
                    format!(
                        "{} bg-transparent border-gray-600 text-gray-300 hover:border-primary-500",
                        base
                    )
                }
            }
        >
            {format_slot_12h(&label)}
        </button>
    }
}

#[component]
fn ReasonField(form: RwSignal<BookingForm>) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm text-gray-400 mb-2">"Reason for Visit"</label>
            <textarea
                rows=4
                placeholder="Please briefly describe the reason for your appointment"
                prop:value=move || form.with(|f| f.reason().to_string())
                on:input=move |ev| form.update(|f| f.set_reason(&event_target_value(&ev)))
                class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            ></textarea>
        </div>
    }
}
