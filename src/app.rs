use crate::config::DashboardConfig;
use crate::dashboard::{dispatch, CommandPublisher, DashboardState, RakeCommand, RakeEffect};
use crate::event::{AppEvent, Event, EventHandler};
use crate::util::io::bus::{BusEvent, BusReceiver, LinkStatus, MessageBus};
use crate::util::io::mqtt::MqttHandle;
use crate::{log_error, log_info};
use chrono::Local;
use color_eyre::eyre::eyre;
use color_eyre::Result;
use ratatui::{
    DefaultTerminal,
    crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};

/// Application.
pub struct App {
    /// Is the application running?
    pub running: bool,
    pub config: DashboardConfig,
    /// Chart, logs and odor level
    pub state: DashboardState,
    pub link_status: LinkStatus,
    pub rake_command: RakeCommand,
    pub rake_effect: RakeEffect,
    /// Where rake commands go
    pub publisher: Box<dyn CommandPublisher + Send>,
    /// Inbound broker traffic
    pub bus_receiver: BusReceiver,
    /// Cleared once the link task has gone away.
    pub bus_open: bool,
    /// Event handler.
    pub events: EventHandler,
}

impl App {
    /// Connects to the broker and starts reading the terminal.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let (message_bus, bus_receiver) = MessageBus::new();
        let link = MqttHandle::start(&config, message_bus);
        Self::with_parts(config, Box::new(link), bus_receiver, EventHandler::new())
    }

    /// Assemble an app from explicit parts; tests use this with a fake publisher.
    pub fn with_parts(
        config: DashboardConfig,
        publisher: Box<dyn CommandPublisher + Send>,
        bus_receiver: BusReceiver,
        events: EventHandler,
    ) -> Result<Self> {
        let state = DashboardState::from_limits(&config.limits)
            .ok_or_else(|| eyre!("widget capacities must be greater than zero"))?;

        Ok(Self {
            running: true,
            state,
            link_status: LinkStatus::Connecting,
            rake_command: RakeCommand::new(&config.topics),
            rake_effect: RakeEffect::new(config.limits.rake_effect()),
            publisher,
            bus_receiver,
            bus_open: true,
            events,
            config,
        })
    }

    /// Run the application's main loop.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        let mut needs_redraw = true;

        while self.running {
            if needs_redraw {
                terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
                needs_redraw = false;
            }

            tokio::select! {
                event = self.events.next() => {
                    needs_redraw = self.handle_event(event?)?;
                }
                message = self.bus_receiver.recv(), if self.bus_open => {
                    match message {
                        Some(bus_event) => self.handle_bus_event(bus_event),
                        None => self.handle_bus_closed(),
                    }
                    needs_redraw = true;
                }
            }
        }

        log_info!("Dashboard exiting");
        Ok(())
    }

    /// Returns whether the screen needs redrawing.
    pub fn handle_event(&mut self, event: Event) -> Result<bool> {
        let redraw = match event {
            Event::Tick => false,
            Event::Crossterm(crossterm::event::Event::Key(key_event)) => {
                self.handle_key_events(key_event)?;
                false
            }
            Event::Crossterm(crossterm::event::Event::Resize(_, _)) => true,
            Event::Crossterm(_) => false,
            Event::App(app_event) => match app_event {
                AppEvent::Rake => {
                    self.rake();
                    true
                }
                AppEvent::RakeEffectElapsed(generation) => self.rake_effect.expire(generation),
                AppEvent::Quit => {
                    self.quit();
                    false
                }
            },
        };
        Ok(redraw)
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> Result<()> {
        if key_event.kind != KeyEventKind::Press {
            return Ok(());
        }

        match key_event.code {
            KeyCode::Esc | KeyCode::Char('q') => self.events.send(AppEvent::Quit),
            KeyCode::Char('c' | 'C') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit)
            }
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('r') => {
                self.events.send(AppEvent::Rake)
            }
            _ => {}
        }
        Ok(())
    }

    /// Send the command and flash the button. The two are independent.
    pub fn rake(&mut self) {
        self.rake_command.send(self.publisher.as_ref());
        self.rake_effect.trigger(self.events.sender());
    }

    pub fn handle_bus_event(&mut self, event: BusEvent) {
        match event {
            BusEvent::Message(message) => {
                dispatch(
                    &mut self.state,
                    &self.config.topics,
                    &message.topic,
                    &message.payload,
                    Local::now(),
                );
            }
            BusEvent::Link(status) => {
                log_info!("Broker link {}", status.label());
                self.link_status = status;
            }
        }
    }

    /// The link task is gone; stop polling its receiver and say so once.
    pub fn handle_bus_closed(&mut self) {
        if !self.bus_open {
            return;
        }
        log_error!("Broker link stopped");
        self.bus_open = false;
        self.link_status = LinkStatus::Disconnected("link stopped".to_string());
    }

    /// Set running to false to quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }
}
