fn main() {
    signup_form::start();
}
