mod guild;
mod wow_character;
