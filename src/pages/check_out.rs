use gloo_timers::callback::Timeout;
use web_sys::{window, HtmlSelectElement};
use yew::prelude::*;

use crate::app::Route;
use crate::components::Footer;
use crate::hooks::{self, use_prefs, use_session};
use crate::models::{CheckoutData, LateCheckout};
use crate::pages::PageProps;
use crate::utils::t;

#[derive(Clone, Copy, PartialEq)]
enum Step {
    Review,
    Payment,
    Confirm,
}

#[function_component(CheckOut)]
pub fn check_out(props: &PageProps) -> Html {
    let session = use_session();
    let prefs = use_prefs();
    let lang = prefs.current_language.clone();

    let step = use_state(|| Step::Review);
    let late_checkout = use_state(LateCheckout::default);
    let payment_method = use_state(|| "card-on-file".to_string());
    let rating: UseStateHandle<Option<u8>> = use_state(|| None);
    let completing = use_state(|| false);

    // Always derived from the pristine bill so re-selecting an option
    // never stacks fee lines.
    let bill = {
        let mut data = CheckoutData::mock();
        data.apply_late_checkout(*late_checkout);
        data
    };

    let on_back = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |_e: MouseEvent| on_navigate.emit(Route::Home))
    };

    let on_late_checkout_change = {
        let lang = lang.clone();
        let late_checkout = late_checkout.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let option = LateCheckout::from_value(&select.value());
            if let Some(fee) = option.fee() {
                if let Some(win) = window() {
                    let _ = win.alert_with_message(&format!(
                        "{}: +${fee:.2}",
                        t(&lang, "late_checkout")
                    ));
                }
            }
            late_checkout.set(option);
        })
    };

    let goto_step = |value: Step| {
        let step = step.clone();
        Callback::from(move |_e: MouseEvent| step.set(value))
    };

    let pick_payment = |value: &'static str| {
        let payment_method = payment_method.clone();
        Callback::from(move |_e: MouseEvent| payment_method.set(value.to_string()))
    };

    let pick_rating = |stars: u8| {
        let rating = rating.clone();
        Callback::from(move |_e: MouseEvent| rating.set(Some(stars)))
    };

    let on_complete = {
        let session = session.clone();
        let completing = completing.clone();
        let payment_method = payment_method.clone();
        let on_navigate = props.on_navigate.clone();

        Callback::from(move |_e: MouseEvent| {
            if *completing {
                return;
            }
            completing.set(true);
            log::info!("🧳 Completing check-out (payment: {})", *payment_method);

            // Payment settlement is simulated until the billing API lands.
            let session = session.clone();
            let completing = completing.clone();
            let on_navigate = on_navigate.clone();
            Timeout::new(1500, move || {
                completing.set(false);
                if let Some(win) = window() {
                    let _ = win.alert_with_message(
                        "✅ Check-out complete. We hope to see you again!",
                    );
                }
                hooks::logout(&session);
                on_navigate.emit(Route::Login);
            })
            .forget();
        })
    };

    html! {
        <div class="container">
            <button class="btn btn-text back-link" onclick={on_back}>
                {format!("← {}", t(&lang, "back_home"))}
            </button>

            <div class="card">
                <h1 class="heading-primary">{t(&lang, "co_title")}</h1>
                <div class="step-bar">
                    { for [
                        (Step::Review, "step_review"),
                        (Step::Payment, "step_payment"),
                        (Step::Confirm, "step_confirm"),
                    ].iter().map(|(value, key)| html! {
                        <span class={classes!("step", (*step == *value).then_some("active"))}>
                            {t(&lang, key)}
                        </span>
                    }) }
                </div>
            </div>

            {
                match *step {
                    Step::Review => html! {
                        <>
                            <div class="card">
                                <h2 class="heading-secondary">{t(&lang, "stay_summary")}</h2>
                                <p>{format!("{}: {}", t(&lang, "guest"), bill.guest_name)}</p>
                                <p>{format!("{}: {} ({})", t(&lang, "room"), bill.room_number, bill.room_type)}</p>
                                <p>{format!("{}: {}", t(&lang, "check_in_date"), bill.check_in_date)}</p>
                                <p>{format!("{}: {}", t(&lang, "check_out_date"), bill.check_out_date)}</p>

                                <div class="form-group">
                                    <label class="form-label" for="late-checkout">{t(&lang, "late_checkout")}</label>
                                    <select id="late-checkout" class="form-input" onchange={on_late_checkout_change}>
                                        <option value="standard" selected={*late_checkout == LateCheckout::Standard}>{t(&lang, "co_standard")}</option>
                                        <option value="1pm" selected={*late_checkout == LateCheckout::OnePm}>{t(&lang, "co_1pm")}</option>
                                        <option value="3pm" selected={*late_checkout == LateCheckout::ThreePm}>{t(&lang, "co_3pm")}</option>
                                        <option value="6pm" selected={*late_checkout == LateCheckout::SixPm}>{t(&lang, "co_6pm")}</option>
                                    </select>
                                </div>
                            </div>

                            <div class="card">
                                <h2 class="heading-secondary">{t(&lang, "bill_title")}</h2>
                                <table class="bill-table">
                                    <thead>
                                        <tr>
                                            <th>{t(&lang, "bill_description")}</th>
                                            <th>{t(&lang, "bill_date")}</th>
                                            <th>{t(&lang, "bill_amount")}</th>
                                        </tr>
                                    </thead>
                                    <tbody>
                                        { for bill.bill_items.iter().map(|item| html! {
                                            <tr key={item.id.clone()}>
                                                <td>{item.description.clone()}</td>
                                                <td>{item.date.clone()}</td>
                                                <td class="amount">{format!("${:.2}", item.amount)}</td>
                                            </tr>
                                        }) }
                                    </tbody>
                                </table>
                                <div class="bill-totals">
                                    <p>{format!("{}: ${:.2}", t(&lang, "bill_subtotal"), bill.subtotal)}</p>
                                    <p>{format!("{} ({:.0}%): ${:.2}", t(&lang, "bill_tax"), bill.tax_rate * 100.0, bill.tax_amount)}</p>
                                    <p><strong>{format!("{}: ${:.2}", t(&lang, "bill_total"), bill.total)}</strong></p>
                                    <p>{format!("{}: -${:.2}", t(&lang, "deposit_paid"), bill.deposit_paid)}</p>
                                    <p class="balance-due"><strong>{format!("{}: ${:.2}", t(&lang, "balance_due"), bill.balance_due)}</strong></p>
                                </div>
                                <button class="btn btn-primary" onclick={goto_step(Step::Payment)}>
                                    {t(&lang, "step_payment")}
                                </button>
                            </div>
                        </>
                    },
                    Step::Payment => html! {
                        <div class="card">
                            <h2 class="heading-secondary">{t(&lang, "payment_title")}</h2>
                            <div class="payment-methods">
                                { for [
                                    ("card-on-file", "card_on_file"),
                                    ("new-card", "new_card"),
                                    ("front-desk", "pay_at_desk"),
                                ].iter().map(|(value, key)| html! {
                                    <button
                                        class={classes!("btn", "btn-toggle", (*payment_method == *value).then_some("active"))}
                                        onclick={pick_payment(*value)}
                                    >
                                        {t(&lang, key)}
                                    </button>
                                }) }
                            </div>

                            if *payment_method == "card-on-file" {
                                <p class="help-text">{"Visa ending in 4242"}</p>
                            }
                            if *payment_method == "new-card" {
                                <div class="form-group">
                                    <label class="form-label" for="card-number">{t(&lang, "card_number")}</label>
                                    <input type="text" id="card-number" class="form-input" placeholder="1234 5678 9012 3456" />
                                </div>
                                <div class="form-row">
                                    <div class="form-group">
                                        <label class="form-label" for="card-expiry">{t(&lang, "expiry")}</label>
                                        <input type="text" id="card-expiry" class="form-input" placeholder="MM/YY" />
                                    </div>
                                    <div class="form-group">
                                        <label class="form-label" for="card-cvc">{t(&lang, "cvc")}</label>
                                        <input type="text" id="card-cvc" class="form-input" placeholder="123" />
                                    </div>
                                </div>
                                <div class="form-group">
                                    <label class="form-label" for="card-name">{t(&lang, "cardholder")}</label>
                                    <input type="text" id="card-name" class="form-input" />
                                </div>
                            }

                            <p class="balance-due">
                                <strong>{format!("{}: ${:.2}", t(&lang, "balance_due"), bill.balance_due)}</strong>
                            </p>
                            <button class="btn btn-primary" onclick={goto_step(Step::Confirm)}>
                                {t(&lang, "step_confirm")}
                            </button>
                        </div>
                    },
                    Step::Confirm => html! {
                        <div class="card">
                            <h2 class="heading-secondary">{t(&lang, "how_was_stay")}</h2>
                            <div class="rating-buttons">
                                { for [
                                    (1u8, "rate_poor"),
                                    (2u8, "rate_average"),
                                    (3u8, "rate_good"),
                                    (4u8, "rate_excellent"),
                                ].iter().map(|(stars, key)| html! {
                                    <button
                                        class={classes!("btn", "btn-toggle", (*rating == Some(*stars)).then_some("active"))}
                                        onclick={pick_rating(*stars)}
                                    >
                                        {t(&lang, key)}
                                    </button>
                                }) }
                            </div>

                            <button class="btn btn-primary" onclick={on_complete} disabled={*completing}>
                                { if *completing { t(&lang, "loading") } else { t(&lang, "complete_checkout") } }
                            </button>
                        </div>
                    },
                }
            }

            <Footer />
        </div>
    }
}
