mod closure;
mod compare;
mod range;
mod string;
