use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use log::debug;
use yew::prelude::*;

use crate::components::viewport::use_in_viewport;
use crate::countup::{Command, Countup, CountupSpec, Tick};

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub icon: AttrValue,
    pub label: AttrValue,
    pub target: u64,
    #[prop_or_default]
    pub suffix: AttrValue,
    /// Delay between becoming visible and the first tick, used by the
    /// stats band to stagger its cards.
    #[prop_or_default]
    pub start_delay_ms: u32,
}

/// One animated statistic card. The machine in `countup` decides what
/// happens; this component only owns the browser timers and re-renders
/// the display string.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let node = use_node_ref();
    let visible = use_in_viewport(&node);

    let machine = {
        let target = props.target;
        let start_delay_ms = props.start_delay_ms;
        let suffix = props.suffix.to_string();
        use_mut_ref(move || {
            Countup::new(CountupSpec {
                target,
                start_delay_ms,
                suffix,
            })
        })
    };
    let delay_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);
    let tick_timer: Rc<RefCell<Option<Interval>>> = use_mut_ref(|| None);

    let display = use_state(|| machine.borrow().display());

    // Feed every visibility edge into the machine; only the first `true`
    // while idle arms anything, so scrolling away and back is harmless.
    {
        let machine = machine.clone();
        let delay_timer = delay_timer.clone();
        let tick_timer = tick_timer.clone();
        let display = display.clone();
        let label = props.label.clone();
        use_effect_with_deps(
            move |visible: &bool| {
                let armed = machine.borrow_mut().on_visibility(*visible);
                if let Some(Command::ScheduleDelay { after_ms }) = armed {
                    debug!("Arming counter \"{}\" in {}ms", label, after_ms);
                    let timeout = {
                        let machine = machine.clone();
                        let tick_timer = tick_timer.clone();
                        Timeout::new(after_ms, move || {
                            let started = machine.borrow_mut().on_delay_elapsed();
                            if let Some(Command::StartTicking { every_ms }) = started {
                                let interval = {
                                    let machine = machine.clone();
                                    let tick_timer = tick_timer.clone();
                                    let display = display.clone();
                                    Interval::new(every_ms, move || {
                                        let outcome = {
                                            let mut machine = machine.borrow_mut();
                                            let outcome = machine.on_tick();
                                            display.set(machine.display());
                                            outcome
                                        };
                                        if outcome == Tick::Finished {
                                            // Dropping the handle clears the JS interval.
                                            tick_timer.borrow_mut().take();
                                        }
                                    })
                                };
                                *tick_timer.borrow_mut() = Some(interval);
                            }
                        })
                    };
                    *delay_timer.borrow_mut() = Some(timeout);
                }
                || ()
            },
            visible,
        );
    }

    // Unmount: silence the machine, then cancel whatever timer is in
    // flight so nothing fires into a destroyed card.
    {
        let machine = machine.clone();
        let delay_timer = delay_timer.clone();
        let tick_timer = tick_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    machine.borrow_mut().dispose();
                    delay_timer.borrow_mut().take();
                    tick_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div ref={node} class="stat-card">
            <span class="stat-icon">{ props.icon.clone() }</span>
            <span class="stat-value">{ (*display).clone() }</span>
            <span class="stat-label">{ props.label.clone() }</span>
        </div>
    }
}
