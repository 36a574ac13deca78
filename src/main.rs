use yew_word_match::components::app::App;

fn main() {
    yew::Renderer::<App>::new().render();
}
