mod assessment;
mod recommend;
