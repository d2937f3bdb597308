//! Rancher dashboard: property picker, KPIs by period, latest herd entries,
//! activity feed, and the month's calendar events.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted behind `RANCHER_ROUTE`. Properties load once on mount; an account
//! without properties gets the creation dialog before anything else. KPIs and
//! the herd table reload whenever the selected property (or the KPI period)
//! changes. The sidebar and the calendar reload after a reminder is toggled.
//! Every continuation checks the page's alive flag before touching signals.

#[cfg(test)]
#[path = "user_home_test.rs"]
mod user_home_test;

use leptos::prelude::*;

use crate::components::predio_modal::PredioModal;
use crate::net::api::ApiClient;
use crate::net::types::{Animal, Evento, HerdFilter, Kpis, Notificacion, Predio};
use crate::routing::Redirect;
use crate::state::ui::{ActivityTab, KpiPeriod, UiState};
use crate::util::lifetime::{AliveFlag, page_alive_flag};

/// Selector value that opens the creation dialog instead of a property.
pub const CREATE_PREDIO_OPTION: &str = "CREAR_NUEVO";

/// Rows shown in the herd table.
pub const HERD_PREVIEW_LEN: usize = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PredioSelection {
    Predio(String),
    CreateNew,
    Nothing,
}

/// Interpret a value picked in the property selector.
pub fn predio_selection(value: &str) -> PredioSelection {
    match value {
        "" => PredioSelection::Nothing,
        CREATE_PREDIO_OPTION => PredioSelection::CreateNew,
        codigo => PredioSelection::Predio(codigo.to_owned()),
    }
}

/// Property to show after the list (re)loads: `preferred` when it is still
/// listed, else the first one.
pub fn pick_selection(predios: &[Predio], preferred: Option<&str>) -> Option<String> {
    preferred
        .filter(|code| predios.iter().any(|p| p.codigo_predio == *code))
        .map(str::to_owned)
        .or_else(|| predios.first().map(|p| p.codigo_predio.clone()))
}

/// Youngest animals first, at most `limit` of them. Birth dates are ISO
/// strings, so they order lexically.
pub fn latest_animals(mut animals: Vec<Animal>, limit: usize) -> Vec<Animal> {
    animals.sort_by(|a, b| b.fecha_nacimiento.cmp(&a.fecha_nacimiento));
    animals.truncate(limit);
    animals
}

/// A read notification without a link has nothing left to do on click.
pub fn notification_is_actionable(n: &Notificacion) -> bool {
    !n.leida || n.link.is_some()
}

/// CSS modifier for an animal's condition, e.g. `"En tratamiento"` becomes
/// `"en-tratamiento"`.
pub fn condition_class(estado: &str) -> String {
    estado.to_lowercase().replacen(' ', "-", 1)
}

/// `(year, month)` moved by `offset` months, month 1-based.
pub fn shift_month(year: i32, month: u32, offset: i32) -> (i32, u32) {
    let index = year * 12 + i32::try_from(month).unwrap_or(1) - 1 + offset;
    let month = u32::try_from(index.rem_euclid(12)).unwrap_or(0) + 1;
    (index.div_euclid(12), month)
}

/// Current `(year, month)` from the browser clock, month 1-based.
#[cfg(feature = "csr")]
fn current_year_month() -> Option<(i32, u32)> {
    let now = js_sys::Date::new_0();
    let year = i32::try_from(now.get_full_year()).ok()?;
    Some((year, now.get_month() + 1))
}

#[cfg(not(feature = "csr"))]
fn current_year_month() -> Option<(i32, u32)> {
    None
}

const MONTHS: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

pub fn month_title(year: i32, month: u32) -> String {
    let name = usize::try_from(month).ok().and_then(|m| MONTHS.get(m.wrapping_sub(1))).copied().unwrap_or("");
    format!("{name} {year}")
}

fn load_predios(
    api: ApiClient,
    alive: AliveFlag,
    predios: RwSignal<Vec<Predio>>,
    selected: RwSignal<Option<String>>,
    creating: RwSignal<Option<bool>>,
    error: RwSignal<Option<String>>,
) {
    leptos::task::spawn_local(async move {
        let loaded = api.my_predios().await;
        if !alive.is_alive() {
            return;
        }
        match loaded {
            Ok(list) => {
                if list.is_empty() {
                    creating.set(Some(false));
                }
                let keep = selected.get_untracked();
                selected.set(pick_selection(&list, keep.as_deref()));
                predios.set(list);
            }
            Err(err) => error.set(Some(err.user_message("No se pudieron cargar sus predios."))),
        }
    });
}

fn load_sidebar(
    api: ApiClient,
    alive: AliveFlag,
    notifications: RwSignal<Vec<Notificacion>>,
    unread: RwSignal<u32>,
    reminders: RwSignal<Vec<Evento>>,
) {
    leptos::task::spawn_local(async move {
        let list = api.notifications().await;
        let count = api.unread_notifications().await;
        let active = api.active_reminders().await;
        if !alive.is_alive() {
            return;
        }
        match list {
            Ok(list) => notifications.set(list),
            Err(err) => log::warn!("notifications unavailable: {err}"),
        }
        match count {
            Ok(count) => unread.set(count.no_leidas),
            Err(err) => log::warn!("unread counter unavailable: {err}"),
        }
        match active {
            Ok(list) => reminders.set(list),
            Err(err) => log::warn!("reminders unavailable: {err}"),
        }
    });
}

#[component]
pub fn UserHomePage() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let api = expect_context::<ApiClient>();
    let alive = page_alive_flag();

    let predios = RwSignal::new(Vec::<Predio>::new());
    let selected = RwSignal::new(None::<String>);
    // Some(dismissable) while the creation dialog is open.
    let creating = RwSignal::new(None::<bool>);
    let kpis = RwSignal::new(None::<Kpis>);
    let herd = RwSignal::new(Vec::<Animal>::new());
    let notifications = RwSignal::new(Vec::<Notificacion>::new());
    let unread = RwSignal::new(0_u32);
    let reminders = RwSignal::new(Vec::<Evento>::new());
    let view_month = RwSignal::new(current_year_month());
    let month_events = RwSignal::new(Vec::<Evento>::new());
    let sidebar_rev = RwSignal::new(0_u32);
    let error = RwSignal::new(None::<String>);

    // Loads follow this memo, so re-notifying `selected` to reset the
    // selector does not refetch.
    let active_predio = Memo::new(move |_| selected.get());

    load_predios(api.clone(), alive.clone(), predios, selected, creating, error);

    {
        let api = api.clone();
        let alive = alive.clone();
        Effect::new(move || {
            sidebar_rev.get();
            load_sidebar(api.clone(), alive.clone(), notifications, unread, reminders);
        });
    }

    {
        let api = api.clone();
        let alive = alive.clone();
        Effect::new(move || {
            sidebar_rev.get();
            let Some((year, month)) = view_month.get() else { return };
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let events = api.calendar_events(year, month).await;
                if !alive.is_alive() {
                    return;
                }
                match events {
                    Ok(list) => month_events.set(list),
                    Err(err) => {
                        month_events.set(Vec::new());
                        log::warn!("calendar {year}-{month} unavailable: {err}");
                    }
                }
            });
        });
    }

    {
        let api = api.clone();
        let alive = alive.clone();
        Effect::new(move || {
            let Some(codigo) = active_predio.get() else { return };
            let period = ui.with(|s| s.kpi_period);
            kpis.set(None);
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let loaded = api.dashboard_kpis(&codigo, period).await;
                if !alive.is_alive() {
                    return;
                }
                match loaded {
                    Ok(k) => kpis.set(Some(k)),
                    Err(err) => error.set(Some(err.user_message("No se pudieron cargar los indicadores."))),
                }
            });
        });
    }

    {
        let api = api.clone();
        let alive = alive.clone();
        Effect::new(move || {
            let Some(codigo) = active_predio.get() else { return };
            herd.set(Vec::new());
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let loaded = api.predio_animals(&codigo, HerdFilter::Active).await;
                if !alive.is_alive() {
                    return;
                }
                match loaded {
                    Ok(list) => herd.set(latest_animals(list, HERD_PREVIEW_LEN)),
                    Err(err) => log::warn!("herd of {codigo} unavailable: {err}"),
                }
            });
        });
    }

    let on_predio_change = move |ev: leptos::ev::Event| match predio_selection(&event_target_value(&ev)) {
        PredioSelection::Predio(codigo) => selected.set(Some(codigo)),
        PredioSelection::CreateNew => {
            selected.update(|_| {});
            creating.set(Some(true));
        }
        PredioSelection::Nothing => {}
    };

    let on_predio_created = {
        let api = api.clone();
        let alive = alive.clone();
        Callback::new(move |created: Predio| {
            creating.set(None);
            selected.set(Some(created.codigo_predio));
            load_predios(api.clone(), alive.clone(), predios, selected, creating, error);
        })
    };
    let on_predio_cancel = Callback::new(move |()| creating.set(None));

    let open_notification = {
        let api = api.clone();
        let alive = alive.clone();
        Callback::new(move |n: Notificacion| {
            if !notification_is_actionable(&n) {
                return;
            }
            let api = api.clone();
            let alive = alive.clone();
            leptos::task::spawn_local(async move {
                let marked = api.mark_notification_read(n.id).await;
                if !alive.is_alive() {
                    return;
                }
                match marked {
                    Ok(detail) => {
                        if !n.leida {
                            unread.update(|c| *c = c.saturating_sub(1));
                        }
                        notifications.update(|list| {
                            if let Some(item) = list.iter_mut().find(|item| item.id == n.id) {
                                item.leida = true;
                            }
                        });
                        if let Some(link) = detail.link.filter(|l| !l.is_empty()) {
                            ui.redirect(&link);
                        }
                    }
                    Err(err) => log::warn!("notification {} not marked read: {err}", n.id),
                }
            });
        })
    };

    let toggle_reminder = Callback::new(move |id: i64| {
        let api = api.clone();
        let alive = alive.clone();
        leptos::task::spawn_local(async move {
            let toggled = api.toggle_reminder(id).await;
            if !alive.is_alive() {
                return;
            }
            match toggled {
                Ok(_) => sidebar_rev.update(|r| *r = r.wrapping_add(1)),
                Err(err) => log::warn!("reminder {id} not toggled: {err}"),
            }
        });
    });

    let move_month = move |offset: i32| {
        view_month.update(|m| {
            if let Some((year, month)) = *m {
                *m = Some(shift_month(year, month, offset));
            }
        });
    };

    let period_is = move |p: KpiPeriod| ui.with(|s| s.kpi_period == p);
    let tab_is = move |t: ActivityTab| ui.with(|s| s.activity_tab == t);
    let kpi = move |f: fn(&Kpis) -> String| kpis.with(|k| k.as_ref().map(f).unwrap_or_else(|| "-".to_owned()));

    view! {
        <section class="user-home">
            <header class="user-home__header">
                <h1>"Mi panel"</h1>
                <select
                    class="user-home__predio"
                    prop:value=move || selected.get().unwrap_or_default()
                    on:change=on_predio_change
                >
                    <For
                        each=move || predios.get()
                        key=|p| p.codigo_predio.clone()
                        children=move |p| {
                            let code = p.codigo_predio.clone();
                            view! { <option value=code>{p.nombre_predio}</option> }
                        }
                    />
                    <option value=CREATE_PREDIO_OPTION>"+ Crear nuevo predio"</option>
                </select>
            </header>

            <Show when=move || error.with(Option::is_some)>
                <p class="auth-error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <div class="kpi-periods">
                {KpiPeriod::ALL
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class="btn"
                                class:btn--selected=move || period_is(p)
                                on:click=move |_| ui.update(|s| s.kpi_period = p)
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <dl class="kpis">
                <dt>"Total del hato"</dt>
                <dd>{move || kpi(|k| k.total_hato.to_string())}</dd>
                <dt>"Alertas de salud"</dt>
                <dd>{move || kpi(|k| k.alertas_salud.to_string())}</dd>
                <dt>"Tareas para hoy"</dt>
                <dd>{move || kpi(|k| k.tareas_para_hoy.to_string())}</dd>
                <dt>{move || format!("Producción de carne ({})", ui.with(|s| s.kpi_period.label()))}</dt>
                <dd>{move || kpi(|k| format!("{:.1}", k.produccion_reciente_carne))}</dd>
                <dt>{move || format!("Producción de leche ({})", ui.with(|s| s.kpi_period.label()))}</dt>
                <dd>{move || kpi(|k| format!("{:.1}", k.produccion_reciente_leche))}</dd>
                <dt>"Solicitudes de transferencia"</dt>
                <dd>{move || kpi(|k| k.solicitudes_transferencia.to_string())}</dd>
            </dl>

            <table class="herd">
                <thead>
                    <tr>
                        <th>"CUI"</th>
                        <th>"Nombre"</th>
                        <th>"Raza"</th>
                        <th>"Sexo"</th>
                        <th>"Nacimiento"</th>
                        <th>"Estado"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || herd.get()
                        key=|a| a.cui.clone()
                        children=|a| {
                            let status = format!("herd__status herd__status--{}", condition_class(&a.estado));
                            view! {
                                <tr>
                                    <td>{a.cui}</td>
                                    <td>{a.nombre}</td>
                                    <td>{a.raza.nombre}</td>
                                    <td>{a.sexo}</td>
                                    <td>{a.fecha_nacimiento}</td>
                                    <td class=status>{a.estado}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <div class="activity">
                <div class="activity__tabs">
                    <button
                        class="btn"
                        class:btn--selected=move || tab_is(ActivityTab::Notifications)
                        on:click=move |_| ui.update(|s| s.activity_tab = ActivityTab::Notifications)
                    >
                        "Notificaciones "
                        <span class="badge">{move || unread.get()}</span>
                    </button>
                    <button
                        class="btn"
                        class:btn--selected=move || tab_is(ActivityTab::Reminders)
                        on:click=move |_| ui.update(|s| s.activity_tab = ActivityTab::Reminders)
                    >
                        "Recordatorios"
                    </button>
                </div>
                <Show
                    when=move || tab_is(ActivityTab::Notifications)
                    fallback=move || {
                        view! {
                            <ul class="activity__list">
                                <For
                                    each=move || reminders.get()
                                    key=|e| (e.id, e.es_completado)
                                    children=move |e| {
                                        let id = e.id;
                                        let locked = !e.es_editable;
                                        view! {
                                            <li class:activity__item--done=e.es_completado>
                                                <label>
                                                    <input
                                                        type="checkbox"
                                                        prop:checked=e.es_completado
                                                        disabled=locked
                                                        on:change=move |_| toggle_reminder.run(id)
                                                    />
                                                    {e.fecha_evento}
                                                    " - "
                                                    {e.titulo}
                                                </label>
                                            </li>
                                        }
                                    }
                                />
                            </ul>
                        }
                    }
                >
                    <ul class="activity__list">
                        <For
                            each=move || notifications.get()
                            key=|n| (n.id, n.leida)
                            children=move |n| {
                                let unread_item = !n.leida;
                                let text = n.mensaje.clone();
                                view! {
                                    <li
                                        class="activity__item"
                                        class:activity__item--unread=unread_item
                                        on:click=move |_| open_notification.run(n.clone())
                                    >
                                        {text}
                                    </li>
                                }
                            }
                        />
                    </ul>
                </Show>
            </div>

            <section class="calendar">
                <header class="calendar__header">
                    <button class="btn" on:click=move |_| move_month(-1)>"‹"</button>
                    <h2>{move || view_month.get().map(|(y, m)| month_title(y, m)).unwrap_or_default()}</h2>
                    <button class="btn" on:click=move |_| move_month(1)>"›"</button>
                </header>
                <ul class="calendar__events">
                    <For
                        each=move || month_events.get()
                        key=|e| e.id
                        children=|e| {
                            let reminder = e.tipo == "RECORDATORIO";
                            view! {
                                <li
                                    class="calendar__event"
                                    class:calendar__event--reminder=reminder
                                    style:border-color=e.estado_color.clone()
                                >
                                    <time>{e.fecha_evento}</time>
                                    " "
                                    {e.titulo}
                                </li>
                            }
                        }
                    />
                </ul>
            </section>

            {move || {
                creating
                    .get()
                    .map(|dismissable| {
                        if dismissable {
                            view! { <PredioModal on_created=on_predio_created on_cancel=on_predio_cancel/> }
                                .into_any()
                        } else {
                            view! { <PredioModal on_created=on_predio_created/> }.into_any()
                        }
                    })
            }}
        </section>
    }
}
