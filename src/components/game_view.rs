use crate::catalog::Catalog;
use crate::config::GameConfig;
use crate::model::{DropOutcome, ItemId, MatchAction};
use crate::shuffle::seeded_rng;
use crate::state::{Feedback, FeedbackAction, GameTimers, PopupKind, ShakePair};
use crate::util::{clog, session_seed, viewport_size};
use yew::prelude::*;

use super::{
    confetti_overlay::ConfettiOverlay, connector_canvas::ConnectorCanvas,
    picture_tile::PictureTile, points_box::PointsBox, popup::PopupMessage, word_tile::WordTile,
};

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub catalog: Catalog,
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let config = use_context::<GameConfig>().unwrap_or_default();
    let board = {
        let catalog = props.catalog.clone();
        use_reducer(move || catalog.deal(&mut seeded_rng(session_seed())))
    };
    let feedback = use_reducer(Feedback::default);
    let celebrating = use_state(|| false);
    let timers = use_mut_ref(GameTimers::default);
    let message_seq = use_mut_ref(|| 0_u64);

    // Effect: react to each drop outcome
    {
        let board = board.clone();
        let feedback = feedback.clone();
        let celebrating = celebrating.clone();
        let timers = timers.clone();
        let message_seq = message_seq.clone();
        let config = config.clone();
        use_effect_with(board.version, move |_| {
            match board.last_outcome {
                Some(DropOutcome::Mismatch { word_id, image_id }) => {
                    clog(&format!("mismatch: word {} on picture {}", word_id, image_id));
                    let generation = {
                        let mut seq = message_seq.borrow_mut();
                        *seq += 1;
                        *seq
                    };
                    feedback.dispatch(FeedbackAction::ShowMessage {
                        text: config.mismatch_text.to_string(),
                        kind: PopupKind::Mismatch,
                        generation,
                    });
                    let pair = ShakePair { word_id, image_id };
                    feedback.dispatch(FeedbackAction::StartShake { pair, generation });

                    let feedback = feedback.clone();
                    let dispatch = move |action| feedback.dispatch(action);
                    timers.borrow_mut().mismatch(&config, pair, generation, dispatch);
                }
                Some(DropOutcome::Matched { score, completed }) => {
                    clog(&format!("match recorded, score {}", score));
                    if completed {
                        let generation = {
                            let mut seq = message_seq.borrow_mut();
                            *seq += 1;
                            *seq
                        };
                        feedback.dispatch(FeedbackAction::ShowMessage {
                            text: config.win_text.to_string(),
                            kind: PopupKind::Win,
                            generation,
                        });
                        celebrating.set(true);
                        let celebrating = celebrating.clone();
                        timers
                            .borrow_mut()
                            .celebrate(&config, move || celebrating.set(false));
                    }
                }
                Some(DropOutcome::AlreadyMatched) | None => {}
            }
            || ()
        });
    }
    // Teardown: nothing scheduled may outlive the view
    {
        let timers = timers.clone();
        use_effect_with((), move |_| move || timers.borrow_mut().cancel_all());
    }

    let on_drop_for = |image_id: ItemId| {
        let board = board.clone();
        Callback::from(move |word_id: ItemId| {
            board.dispatch(MatchAction::Drop { word_id, image_id });
        })
    };

    let (vw, vh) = if *celebrating { viewport_size() } else { (0, 0) };
    html! {
        <div class="app-container" style="position:relative; min-height:100vh; font-family:sans-serif;">
            <div class="title-container" style="text-align:center; padding-top:12px;">
                <h1 style="margin:0;">{ config.title }</h1>
            </div>
            <PointsBox points={board.score()} total={board.total()} />
            if *celebrating {
                <ConfettiOverlay width={vw} height={vh} />
            }
            <ConnectorCanvas matches={board.matches.clone()} />
            <div id="game-container" class="game-grid" style="display:flex; justify-content:center; gap:160px; padding:16px;">
                <div class="words">
                    { for board.words.iter().map(|word| html! {
                        <WordTile
                            key={word.id.0}
                            word={word.clone()}
                            matched={board.is_word_matched(word.id)}
                            shake={feedback.word_shake(word.id)}
                        />
                    }) }
                </div>
                <div class="images">
                    { for board.pictures.iter().map(|picture| html! {
                        <PictureTile
                            key={picture.id.0}
                            picture={picture.clone()}
                            matched={board.is_image_matched(picture.id)}
                            shake={feedback.image_shake(picture.id)}
                            on_drop={on_drop_for(picture.id)}
                        />
                    }) }
                </div>
            </div>
            <PopupMessage popup={feedback.popup.clone()} />
        </div>
    }
}
