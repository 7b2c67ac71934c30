//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{Button, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::BoardView;
use super::game_state::GameState;
use super::theme::*;
use crate::engine::{Difficulty, MovePolicy};

/// Active screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    /// Landing page with difficulty selection
    Menu,
    /// Board and side panel
    Playing,
}

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    screen: Screen,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(Difficulty::default()),
            board_view: BoardView::default(),
            screen: Screen::Menu,
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the landing page: title, difficulty selection, start/quit
    fn render_menu(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_BG))
            .show(ctx, |ui| {
                ui.add_space(ui.available_height() * 0.18);

                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TIC TAC TOE").size(56.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(30.0);

                    ui.label(
                        RichText::new(format!("Difficulty: {}", self.state.difficulty.label()))
                            .size(22.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(12.0);

                    ui.horizontal(|ui| {
                        let total = 3.0 * 150.0 + 2.0 * 10.0;
                        ui.add_space((ui.available_width() - total) / 2.0);
                        for difficulty in Difficulty::ALL {
                            let active = self.state.difficulty == difficulty;
                            let fill = if active {
                                DIFFICULTY_BUTTON_ACTIVE
                            } else {
                                DIFFICULTY_BUTTON_COLOR
                            };
                            let button = Button::new(
                                RichText::new(difficulty.label()).size(18.0).color(TEXT_PRIMARY),
                            )
                            .fill(fill)
                            .min_size(Vec2::new(150.0, 50.0));

                            if ui.add(button).clicked() {
                                self.state.difficulty = difficulty;
                            }
                            ui.add_space(10.0);
                        }
                    });

                    ui.add_space(40.0);
                    let start = Button::new(RichText::new("START").size(28.0).color(TEXT_PRIMARY))
                        .fill(BUTTON_COLOR)
                        .min_size(Vec2::new(200.0, 70.0));
                    if ui.add(start).clicked() {
                        self.start_game();
                    }

                    ui.add_space(20.0);
                    let quit = Button::new(RichText::new("END GAME").size(24.0).color(TEXT_PRIMARY))
                        .fill(END_BUTTON_COLOR)
                        .min_size(Vec2::new(250.0, 70.0));
                    if ui.add(quit).clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });
            });
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (R)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("Back to Menu (Esc)").clicked() {
                        self.back_to_menu();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!("Difficulty: {}", self.state.difficulty.label()));
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, result.message());
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("OX").size(20.0).color(CIRCLE_COLOR));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC TAC TOE").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let (symbol, name) = if self.state.is_human_turn() {
                ("O", "YOU")
            } else {
                ("X", "COMPUTER")
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(symbol).size(32.0).strong().color(CIRCLE_COLOR));
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.is_computer_thinking() {
                        ("AI thinking...", STATUS_THINKING)
                    } else if self.state.game_over.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("Restart").clicked() {
                    self.state.reset();
                }
                ui.add_space(4.0);
                if ui.button("Menu").clicked() {
                    self.back_to_menu();
                }
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Marks on board: {}", self.state.board.mark_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the last selection's statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(result) = self.state.last_result {
                let policy = match result.policy {
                    MovePolicy::Random => "Random",
                    MovePolicy::Minimax => "Minimax",
                };
                ui.label(RichText::new(policy).size(11.0).strong().color(STATUS_READY));
                ui.label(
                    RichText::new(format!("Score: {}", result.score))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes, {}us", result.nodes, result.time_us))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(coord) = result.best_move {
                    ui.label(
                        RichText::new(format!("-> ({}, {})", coord.row, coord.col))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("No move yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, message: &str) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(GAME_OVER_ACCENT));
                    ui.add_space(8.0);
                    ui.label(RichText::new(message).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.add_space(12.0);

                    let play_again =
                        Button::new(RichText::new("PLAY AGAIN").size(16.0).color(TEXT_PRIMARY))
                            .fill(BUTTON_COLOR)
                            .min_size(Vec2::new(160.0, 40.0));
                    if ui.add(play_again).clicked() {
                        self.state.reset();
                    }

                    ui.add_space(6.0);
                    let menu = Button::new(RichText::new("MENU").size(14.0).color(TEXT_PRIMARY))
                        .fill(END_BUTTON_COLOR)
                        .min_size(Vec2::new(160.0, 34.0));
                    if ui.add(menu).clicked() {
                        self.back_to_menu();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let winning_line = self.state.game_over.and_then(|result| result.winning_line);
            let accept_input = self.state.game_over.is_none()
                && self.state.is_human_turn()
                && !self.state.is_computer_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.last_move,
                winning_line,
                accept_input,
            );

            if let Some(coord) = clicked {
                if let Err(msg) = self.state.try_place(coord) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // R - Restart current game
            if i.key_pressed(egui::Key::R) {
                self.state.reset();
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }

            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // Esc - Back to menu
            if i.key_pressed(egui::Key::Escape) {
                self.back_to_menu();
            }
        });
    }

    fn start_game(&mut self) {
        self.state.reset();
        self.screen = Screen::Playing;
    }

    fn back_to_menu(&mut self) {
        self.state.reset();
        self.screen = Screen::Menu;
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        match self.screen {
            Screen::Menu => {
                self.render_menu(ctx);
            }
            Screen::Playing => {
                self.handle_input(ctx);

                // Run the computer's reply once its think delay elapses
                self.state.poll_computer();

                self.render_menu_bar(ctx);
                self.render_side_panel(ctx);
                self.render_board(ctx);

                // Keep repainting while the reply is pending
                if self.state.is_computer_thinking() {
                    ctx.request_repaint();
                }
            }
        }
    }
}
